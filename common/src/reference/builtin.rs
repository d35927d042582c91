//! Bundled reference table
//!
//! Countries that dominate European and North American genealogical
//! records, with endonyms, common provinces/counties, region tags and
//! dated historical names.

use super::{CountryMatchingData, YearRange};

struct Preset {
    iso2: &'static str,
    iso3: &'static str,
    canonical: &'static str,
    aliases: &'static [&'static str],
    patterns: &'static [&'static str],
    regions: &'static [&'static str],
    historical: &'static [(&'static str, i32, i32)],
}

const PRESETS: &[Preset] = &[
    Preset {
        iso2: "AR",
        iso3: "ARG",
        canonical: "Argentina",
        aliases: &["Argentine Republic", "República Argentina", "Argentinien"],
        patterns: &["Buenos Aires", "Entre Ríos", "Mendoza", "Tucumán", "Rosario", "Patagonia"],
        regions: &["South America", "Latin America"],
        historical: &[("United Provinces of the Río de la Plata", 1816, 1831)],
    },
    Preset {
        iso2: "AT",
        iso3: "AUT",
        canonical: "Austria",
        aliases: &["Österreich", "Oesterreich", "Autriche"],
        patterns: &[
            "Wien", "Vienna", "Tirol", "Tyrol", "Salzburg", "Steiermark", "Styria", "Kärnten",
            "Carinthia", "Vorarlberg", "Linz", "Graz", "Niederösterreich", "Oberösterreich",
        ],
        regions: &["Central Europe", "Holy Roman Empire", "Austria-Hungary", "Habsburg Monarchy"],
        historical: &[("Austrian Empire", 1804, 1867), ("Archduchy of Austria", 1453, 1804)],
    },
    Preset {
        iso2: "AU",
        iso3: "AUS",
        canonical: "Australia",
        aliases: &["Commonwealth of Australia"],
        patterns: &[
            "New South Wales", "Queensland", "Tasmania", "Sydney", "Melbourne", "Adelaide",
            "Brisbane", "Western Australia", "South Australia",
        ],
        regions: &["Oceania", "British Empire"],
        historical: &[("Van Diemen's Land", 1803, 1856), ("New Holland", 1644, 1824)],
    },
    Preset {
        iso2: "BA",
        iso3: "BIH",
        canonical: "Bosnia and Herzegovina",
        aliases: &["Bosnia", "Bosna i Hercegovina", "Herzegovina", "Bosnia-Herzegovina"],
        patterns: &["Sarajevo", "Mostar", "Banja Luka", "Tuzla"],
        regions: &["Balkans", "Yugoslavia", "Ottoman Empire", "Austria-Hungary"],
        historical: &[],
    },
    Preset {
        iso2: "BB",
        iso3: "BRB",
        canonical: "Barbados",
        aliases: &[],
        patterns: &["Bridgetown", "Christ Church", "St. Michael"],
        regions: &["West Indies", "British Empire"],
        historical: &[],
    },
    Preset {
        iso2: "BD",
        iso3: "BGD",
        canonical: "Bangladesh",
        aliases: &["People's Republic of Bangladesh"],
        patterns: &["Dhaka", "Dacca", "Chittagong", "Bengal"],
        regions: &["South Asia"],
        historical: &[("East Pakistan", 1947, 1971), ("East Bengal", 1947, 1955)],
    },
    Preset {
        iso2: "BE",
        iso3: "BEL",
        canonical: "Belgium",
        aliases: &["Belgique", "België", "Belgien"],
        patterns: &[
            "Brussels", "Bruxelles", "Brussel", "Antwerp", "Antwerpen", "Flanders",
            "Vlaanderen", "Wallonia", "Liège", "Gent", "Ghent", "Hainaut", "Limburg",
        ],
        regions: &["Low Countries", "Benelux"],
        historical: &[("Austrian Netherlands", 1714, 1797), ("Spanish Netherlands", 1556, 1714)],
    },
    Preset {
        iso2: "BG",
        iso3: "BGR",
        canonical: "Bulgaria",
        aliases: &["Balgariya", "Bulgarien", "Bulgarie"],
        patterns: &["Sofia", "Plovdiv", "Varna", "Burgas", "Ruse"],
        regions: &["Balkans", "Ottoman Empire"],
        historical: &[("Principality of Bulgaria", 1878, 1908)],
    },
    Preset {
        iso2: "BR",
        iso3: "BRA",
        canonical: "Brazil",
        aliases: &["Brasil", "Brasilien", "Brésil"],
        patterns: &[
            "Rio de Janeiro", "São Paulo", "Bahia", "Pernambuco", "Minas Gerais",
            "Rio Grande do Sul", "Santa Catarina", "Paraná",
        ],
        regions: &["South America", "Latin America"],
        historical: &[("Empire of Brazil", 1822, 1889)],
    },
    Preset {
        iso2: "BS",
        iso3: "BHS",
        canonical: "Bahamas",
        aliases: &["The Bahamas"],
        patterns: &["Nassau", "Eleuthera", "Grand Bahama"],
        regions: &["West Indies", "British Empire"],
        historical: &[],
    },
    Preset {
        iso2: "BY",
        iso3: "BLR",
        canonical: "Belarus",
        aliases: &["Belorussia", "Byelorussia", "White Russia", "Bielarus"],
        patterns: &["Minsk", "Grodno", "Hrodna", "Vitebsk", "Mogilev", "Brest-Litovsk", "Pinsk"],
        regions: &["Eastern Europe", "Russian Empire", "Soviet Union"],
        historical: &[("Byelorussian SSR", 1922, 1991)],
    },
    Preset {
        iso2: "CA",
        iso3: "CAN",
        canonical: "Canada",
        aliases: &["Dominion of Canada"],
        patterns: &[
            "Ontario", "Quebec", "Nova Scotia", "New Brunswick", "Manitoba", "British Columbia",
            "Alberta", "Saskatchewan", "Newfoundland", "Prince Edward Island", "Montreal", "Toronto",
        ],
        regions: &["North America", "British Empire"],
        historical: &[
            ("Upper Canada", 1791, 1841),
            ("Lower Canada", 1791, 1841),
            ("Canada West", 1841, 1867),
            ("Canada East", 1841, 1867),
            ("New France", 1534, 1763),
        ],
    },
    Preset {
        iso2: "CH",
        iso3: "CHE",
        canonical: "Switzerland",
        aliases: &["Schweiz", "Suisse", "Svizzera", "Helvetia", "Confoederatio Helvetica"],
        patterns: &[
            "Zürich", "Bern", "Berne", "Geneva", "Genève", "Basel", "Luzern", "Lucerne",
            "Graubünden", "Aargau", "Ticino", "St. Gallen", "Thurgau", "Vaud", "Valais", "Glarus",
            "Schaffhausen",
        ],
        regions: &["Central Europe", "Holy Roman Empire"],
        historical: &[("Helvetic Republic", 1798, 1803), ("Old Swiss Confederacy", 1291, 1798)],
    },
    Preset {
        iso2: "CN",
        iso3: "CHN",
        canonical: "China",
        aliases: &["Zhongguo", "Chine", "People's Republic of China"],
        patterns: &["Beijing", "Peking", "Shanghai", "Canton", "Guangzhou", "Nanking", "Nanjing"],
        regions: &["East Asia"],
        historical: &[("Chinese Empire", 1644, 1912), ("Qing Empire", 1644, 1912)],
    },
    Preset {
        iso2: "CU",
        iso3: "CUB",
        canonical: "Cuba",
        aliases: &["República de Cuba"],
        patterns: &["Havana", "La Habana", "Santiago de Cuba", "Matanzas"],
        regions: &["West Indies", "Latin America"],
        historical: &[],
    },
    Preset {
        iso2: "CZ",
        iso3: "CZE",
        canonical: "Czech Republic",
        aliases: &["Czechia", "Česko", "Česká republika", "Tschechien"],
        patterns: &[
            "Praha", "Prague", "Prag", "Brno", "Brünn", "Plzeň", "Pilsen", "Ostrava", "Budweis",
            "České Budějovice",
        ],
        regions: &["Central Europe", "Holy Roman Empire", "Austria-Hungary", "Czechoslovakia"],
        historical: &[
            ("Bohemia", 1198, 1918),
            ("Böhmen", 1198, 1918),
            ("Moravia", 1182, 1918),
            ("Mähren", 1182, 1918),
        ],
    },
    Preset {
        iso2: "DE",
        iso3: "DEU",
        canonical: "Germany",
        aliases: &["Deutschland", "Allemagne", "Germania", "Alemania", "Niemcy"],
        patterns: &[
            "Bayern", "Bavaria", "Sachsen", "Saxony", "Württemberg", "Hessen", "Hesse", "Hannover",
            "Hanover", "Westfalen", "Westphalia", "Baden", "Pommern", "Pomerania", "Mecklenburg",
            "Schleswig-Holstein", "Rheinland", "Rhineland", "Berlin", "Hamburg", "Bremen",
            "Thüringen", "Thuringia", "Brandenburg", "Pfalz", "Palatinate", "Oldenburg",
        ],
        regions: &["Central Europe", "Holy Roman Empire", "German Confederation"],
        historical: &[
            ("Prussia", 1701, 1918),
            ("Preußen", 1701, 1918),
            ("German Empire", 1871, 1918),
            ("Deutsches Reich", 1871, 1945),
            ("Kingdom of Bavaria", 1806, 1918),
            ("Kingdom of Saxony", 1806, 1918),
            ("Kingdom of Württemberg", 1806, 1918),
            ("Kingdom of Hanover", 1814, 1866),
            ("Elsass-Lothringen", 1871, 1918),
            ("West Germany", 1949, 1990),
            ("East Germany", 1949, 1990),
            ("DDR", 1949, 1990),
        ],
    },
    Preset {
        iso2: "DK",
        iso3: "DNK",
        canonical: "Denmark",
        aliases: &["Danmark", "Dänemark", "Danemark"],
        patterns: &[
            "Copenhagen", "København", "Jutland", "Jylland", "Sjælland", "Fyn", "Funen",
            "Bornholm", "Odense", "Aarhus", "Aalborg",
        ],
        regions: &["Scandinavia", "Nordic Countries"],
        historical: &[("Denmark-Norway", 1524, 1814)],
    },
    Preset {
        iso2: "DO",
        iso3: "DOM",
        canonical: "Dominican Republic",
        aliases: &["República Dominicana"],
        patterns: &["Santo Domingo", "Santiago de los Caballeros", "Puerto Plata"],
        regions: &["West Indies", "Latin America"],
        historical: &[],
    },
    Preset {
        iso2: "EE",
        iso3: "EST",
        canonical: "Estonia",
        aliases: &["Eesti", "Estland"],
        patterns: &["Tallinn", "Reval", "Tartu", "Dorpat", "Livonia", "Pärnu"],
        regions: &["Baltic States", "Russian Empire", "Soviet Union"],
        historical: &[("Governorate of Estonia", 1721, 1917)],
    },
    Preset {
        iso2: "ES",
        iso3: "ESP",
        canonical: "Spain",
        aliases: &["España", "Espagne", "Spanien"],
        patterns: &[
            "Madrid", "Barcelona", "Cataluña", "Catalonia", "Galicia", "Andalucía", "Andalusia",
            "Valencia", "Sevilla", "Seville", "Asturias", "Navarra", "Castilla", "Castile",
            "Aragón", "Vizcaya", "Biscay",
        ],
        regions: &["Iberian Peninsula", "Southern Europe"],
        historical: &[("Kingdom of Castile", 1065, 1715), ("Crown of Aragon", 1162, 1716)],
    },
    Preset {
        iso2: "FI",
        iso3: "FIN",
        canonical: "Finland",
        aliases: &["Suomi", "Finnland", "Finlande"],
        patterns: &["Helsinki", "Helsingfors", "Turku", "Åbo", "Tampere", "Vaasa", "Oulu", "Viipuri"],
        regions: &["Nordic Countries", "Russian Empire"],
        historical: &[("Grand Duchy of Finland", 1809, 1917)],
    },
    Preset {
        iso2: "FR",
        iso3: "FRA",
        canonical: "France",
        aliases: &["La France", "Frankreich", "Francia", "République française"],
        patterns: &[
            "Paris", "Alsace", "Lorraine", "Normandie", "Normandy", "Bretagne", "Brittany", "Lyon",
            "Marseille", "Bordeaux", "Provence", "Picardie", "Bourgogne", "Burgundy", "Gascogne",
            "Savoie", "Savoy",
        ],
        regions: &["Western Europe"],
        historical: &[("Kingdom of France", 987, 1792), ("French Empire", 1804, 1870)],
    },
    Preset {
        iso2: "GB",
        iso3: "GBR",
        canonical: "United Kingdom",
        aliases: &[
            "UK", "Great Britain", "Britain", "England", "Scotland", "Wales", "Northern Ireland",
            "United Kingdom of Great Britain and Northern Ireland", "Angleterre", "Schottland",
        ],
        patterns: &[
            "London", "Yorkshire", "Lancashire", "Kent", "Devon", "Cornwall", "Middlesex",
            "Somerset", "Norfolk", "Suffolk", "Essex", "Sussex", "Cheshire", "Durham",
            "Northumberland", "Edinburgh", "Glasgow", "Lanarkshire", "Aberdeenshire", "Perthshire",
            "Glamorgan", "Belfast", "Antrim", "Liverpool", "Manchester", "Birmingham",
        ],
        regions: &["British Isles", "British Empire"],
        historical: &[
            ("Kingdom of Great Britain", 1707, 1800),
            ("United Kingdom of Great Britain and Ireland", 1801, 1922),
            ("Kingdom of England", 927, 1707),
            ("Kingdom of Scotland", 843, 1707),
        ],
    },
    Preset {
        iso2: "GR",
        iso3: "GRC",
        canonical: "Greece",
        aliases: &["Hellas", "Ellada", "Griechenland", "Grèce"],
        patterns: &["Athens", "Athina", "Thessaloniki", "Salonica", "Crete", "Kriti", "Peloponnese", "Corfu"],
        regions: &["Balkans", "Ottoman Empire", "Southern Europe"],
        historical: &[("Kingdom of Greece", 1832, 1924)],
    },
    Preset {
        iso2: "HR",
        iso3: "HRV",
        canonical: "Croatia",
        aliases: &["Hrvatska", "Kroatien", "Croatie"],
        patterns: &[
            "Zagreb", "Agram", "Dubrovnik", "Ragusa", "Dalmatia", "Dalmacija", "Slavonia",
            "Istria", "Rijeka", "Fiume",
        ],
        regions: &["Balkans", "Yugoslavia", "Austria-Hungary"],
        historical: &[("Kingdom of Croatia-Slavonia", 1868, 1918)],
    },
    Preset {
        iso2: "HT",
        iso3: "HTI",
        canonical: "Haiti",
        aliases: &["Hayti", "Haïti"],
        patterns: &["Port-au-Prince", "Cap-Haïtien"],
        regions: &["West Indies", "Latin America"],
        historical: &[("Saint-Domingue", 1697, 1804)],
    },
    Preset {
        iso2: "HU",
        iso3: "HUN",
        canonical: "Hungary",
        aliases: &["Magyarország", "Ungarn", "Hongrie"],
        patterns: &["Budapest", "Pest", "Buda", "Debrecen", "Szeged", "Pécs", "Győr", "Miskolc"],
        regions: &["Central Europe", "Austria-Hungary", "Habsburg Monarchy"],
        historical: &[("Kingdom of Hungary", 1000, 1946)],
    },
    Preset {
        iso2: "IE",
        iso3: "IRL",
        canonical: "Ireland",
        aliases: &["Éire", "Republic of Ireland", "Erin", "Hibernia", "Irland", "Irlande"],
        patterns: &[
            "Cork", "Dublin", "Kerry", "Galway", "Limerick", "Tipperary", "Mayo", "Clare",
            "Sligo", "Donegal", "Wexford", "Wicklow", "Kilkenny", "Waterford", "Roscommon",
            "Leitrim", "Longford", "Westmeath", "Meath", "Offaly", "King's County", "Laois",
            "Queen's County", "Cavan", "Monaghan", "Louth", "Carlow", "Kildare",
        ],
        regions: &["British Isles"],
        historical: &[("Irish Free State", 1922, 1937)],
    },
    Preset {
        iso2: "IM",
        iso3: "IMN",
        canonical: "Isle of Man",
        aliases: &["Mann", "Ellan Vannin"],
        patterns: &["Castletown"],
        regions: &["British Isles"],
        historical: &[],
    },
    Preset {
        iso2: "IN",
        iso3: "IND",
        canonical: "India",
        aliases: &["Bharat", "Hindustan"],
        patterns: &["Bombay", "Mumbai", "Calcutta", "Kolkata", "Madras", "Chennai", "Delhi", "Bengal", "Punjab"],
        regions: &["South Asia", "British Empire"],
        historical: &[("British India", 1858, 1947)],
    },
    Preset {
        iso2: "IS",
        iso3: "ISL",
        canonical: "Iceland",
        aliases: &["Ísland", "Island"],
        patterns: &["Reykjavík", "Akureyri"],
        regions: &["Nordic Countries"],
        historical: &[],
    },
    Preset {
        iso2: "IT",
        iso3: "ITA",
        canonical: "Italy",
        aliases: &["Italia", "Italien", "Italie"],
        patterns: &[
            "Rome", "Roma", "Milano", "Milan", "Napoli", "Naples", "Sicilia", "Sicily", "Sardegna",
            "Sardinia", "Venezia", "Venice", "Toscana", "Tuscany", "Piemonte", "Piedmont",
            "Lombardia", "Lombardy", "Calabria", "Genova", "Genoa", "Torino", "Turin", "Firenze",
            "Florence", "Palermo",
        ],
        regions: &["Southern Europe"],
        historical: &[
            ("Kingdom of the Two Sicilies", 1816, 1861),
            ("Kingdom of Sardinia", 1720, 1861),
            ("Papal States", 756, 1870),
            ("Kingdom of Italy", 1861, 1946),
        ],
    },
    Preset {
        iso2: "JM",
        iso3: "JAM",
        canonical: "Jamaica",
        aliases: &[],
        patterns: &["Kingston", "Spanish Town", "Montego Bay"],
        regions: &["West Indies", "British Empire"],
        historical: &[],
    },
    Preset {
        iso2: "JP",
        iso3: "JPN",
        canonical: "Japan",
        aliases: &["Nippon", "Nihon"],
        patterns: &["Tokyo", "Osaka", "Kyoto", "Hiroshima", "Nagasaki", "Yokohama"],
        regions: &["East Asia"],
        historical: &[("Edo", 1603, 1868), ("Empire of Japan", 1868, 1947)],
    },
    Preset {
        iso2: "LK",
        iso3: "LKA",
        canonical: "Sri Lanka",
        aliases: &["Lanka"],
        patterns: &["Colombo", "Kandy", "Jaffna"],
        regions: &["South Asia", "British Empire"],
        historical: &[("Ceylon", 1505, 1972)],
    },
    Preset {
        iso2: "LT",
        iso3: "LTU",
        canonical: "Lithuania",
        aliases: &["Lietuva", "Litauen", "Lituanie"],
        patterns: &["Vilnius", "Vilna", "Wilno", "Kaunas", "Kovno", "Memel", "Klaipėda", "Šiauliai"],
        regions: &["Baltic States", "Russian Empire", "Soviet Union"],
        historical: &[("Grand Duchy of Lithuania", 1236, 1795)],
    },
    Preset {
        iso2: "LU",
        iso3: "LUX",
        canonical: "Luxembourg",
        aliases: &["Luxemburg", "Lëtzebuerg"],
        patterns: &["Esch-sur-Alzette", "Diekirch", "Echternach"],
        regions: &["Low Countries", "Benelux", "German Confederation"],
        historical: &[],
    },
    Preset {
        iso2: "LV",
        iso3: "LVA",
        canonical: "Latvia",
        aliases: &["Latvija", "Lettland", "Lettonie"],
        patterns: &["Riga", "Courland", "Kurland", "Livonia", "Daugavpils", "Dvinsk", "Liepāja", "Libau"],
        regions: &["Baltic States", "Russian Empire", "Soviet Union"],
        historical: &[("Duchy of Courland", 1561, 1795)],
    },
    Preset {
        iso2: "ME",
        iso3: "MNE",
        canonical: "Montenegro",
        aliases: &["Crna Gora"],
        patterns: &["Podgorica", "Cetinje", "Kotor"],
        regions: &["Balkans", "Yugoslavia"],
        historical: &[("Principality of Montenegro", 1852, 1910)],
    },
    Preset {
        iso2: "MK",
        iso3: "MKD",
        canonical: "North Macedonia",
        aliases: &["Macedonia", "Makedonija"],
        patterns: &["Skopje", "Bitola", "Ohrid"],
        regions: &["Balkans", "Yugoslavia", "Ottoman Empire"],
        historical: &[],
    },
    Preset {
        iso2: "MX",
        iso3: "MEX",
        canonical: "Mexico",
        aliases: &["México", "Méjico", "Estados Unidos Mexicanos"],
        patterns: &["Jalisco", "Oaxaca", "Yucatán", "Chihuahua", "Sonora", "Veracruz", "Guadalajara"],
        regions: &["North America", "Latin America"],
        historical: &[("New Spain", 1521, 1821)],
    },
    Preset {
        iso2: "NL",
        iso3: "NLD",
        canonical: "Netherlands",
        aliases: &["Nederland", "Holland", "The Netherlands", "Pays-Bas", "Niederlande"],
        patterns: &[
            "Amsterdam", "Rotterdam", "Utrecht", "Friesland", "Groningen", "Zeeland",
            "Gelderland", "Noord-Brabant", "Noord-Holland", "Zuid-Holland", "Overijssel", "Drenthe",
        ],
        regions: &["Low Countries", "Benelux"],
        historical: &[
            ("Dutch Republic", 1581, 1795),
            ("United Provinces", 1581, 1795),
            ("Batavian Republic", 1795, 1806),
        ],
    },
    Preset {
        iso2: "NO",
        iso3: "NOR",
        canonical: "Norway",
        aliases: &["Norge", "Noreg", "Norwegen", "Norvège"],
        patterns: &[
            "Oslo", "Bergen", "Trondheim", "Stavanger", "Telemark", "Hedmark", "Oppland",
            "Nordland", "Hordaland", "Rogaland",
        ],
        regions: &["Scandinavia", "Nordic Countries"],
        historical: &[("Christiania", 1624, 1924), ("Kristiania", 1877, 1924)],
    },
    Preset {
        iso2: "NZ",
        iso3: "NZL",
        canonical: "New Zealand",
        aliases: &["Aotearoa"],
        patterns: &["Auckland", "Wellington", "Otago", "Christchurch", "Dunedin"],
        regions: &["Oceania", "British Empire"],
        historical: &[("Colony of New Zealand", 1841, 1907)],
    },
    Preset {
        iso2: "PH",
        iso3: "PHL",
        canonical: "Philippines",
        aliases: &["Pilipinas", "Philippine Islands"],
        patterns: &["Manila", "Luzon", "Cebu", "Mindanao", "Visayas"],
        regions: &["Southeast Asia"],
        historical: &[("Captaincy General of the Philippines", 1565, 1898)],
    },
    Preset {
        iso2: "PK",
        iso3: "PAK",
        canonical: "Pakistan",
        aliases: &["Islamic Republic of Pakistan"],
        patterns: &["Karachi", "Lahore", "Punjab", "Sindh", "Peshawar"],
        regions: &["South Asia"],
        historical: &[("West Pakistan", 1947, 1970)],
    },
    Preset {
        iso2: "PL",
        iso3: "POL",
        canonical: "Poland",
        aliases: &["Polska", "Polen", "Pologne"],
        patterns: &[
            "Warszawa", "Warsaw", "Kraków", "Cracow", "Poznań", "Posen", "Łódź", "Gdańsk",
            "Danzig", "Wrocław", "Breslau", "Lublin", "Galicia", "Galicja", "Silesia", "Śląsk",
            "Schlesien", "Pomorze", "Mazowsze", "Masovia",
        ],
        regions: &["Central Europe", "Russian Empire"],
        historical: &[
            ("Congress Poland", 1815, 1867),
            ("Kingdom of Poland", 1025, 1795),
            ("Polish-Lithuanian Commonwealth", 1569, 1795),
            ("Duchy of Warsaw", 1807, 1815),
            ("Vistula Land", 1867, 1915),
        ],
    },
    Preset {
        iso2: "PT",
        iso3: "PRT",
        canonical: "Portugal",
        aliases: &["República Portuguesa", "Lusitania"],
        patterns: &["Lisboa", "Lisbon", "Porto", "Oporto", "Madeira", "Azores", "Açores", "Braga", "Coimbra", "Minho", "Algarve"],
        regions: &["Iberian Peninsula", "Southern Europe"],
        historical: &[("Kingdom of Portugal", 1139, 1910)],
    },
    Preset {
        iso2: "RO",
        iso3: "ROU",
        canonical: "Romania",
        aliases: &["România", "Rumania", "Roumania", "Rumänien"],
        patterns: &[
            "Bucharest", "București", "Transylvania", "Transilvania", "Siebenbürgen", "Wallachia",
            "Banat", "Cluj", "Timișoara", "Iași",
        ],
        regions: &["Balkans", "Eastern Europe"],
        historical: &[("United Principalities", 1859, 1881), ("Kingdom of Romania", 1881, 1947)],
    },
    Preset {
        iso2: "RS",
        iso3: "SRB",
        canonical: "Serbia",
        aliases: &["Srbija", "Serbien", "Serbie"],
        patterns: &["Belgrade", "Beograd", "Novi Sad", "Vojvodina", "Niš", "Kragujevac"],
        regions: &["Balkans", "Yugoslavia", "Ottoman Empire"],
        historical: &[("Kingdom of Serbia", 1882, 1918), ("Principality of Serbia", 1815, 1882)],
    },
    Preset {
        iso2: "RU",
        iso3: "RUS",
        canonical: "Russia",
        aliases: &["Rossiya", "Russland", "Russie", "Russian Federation"],
        patterns: &[
            "Moscow", "Moskva", "St. Petersburg", "Saint Petersburg", "Siberia", "Volga",
            "Kaliningrad", "Königsberg", "Samara", "Saratov",
        ],
        regions: &["Eastern Europe", "Russian Empire", "Soviet Union"],
        historical: &[
            ("Muscovy", 1283, 1721),
            ("Tsardom of Russia", 1547, 1721),
            ("Petrograd", 1914, 1924),
            ("Leningrad", 1924, 1991),
        ],
    },
    Preset {
        iso2: "SE",
        iso3: "SWE",
        canonical: "Sweden",
        aliases: &["Sverige", "Schweden", "Suède"],
        patterns: &[
            "Stockholm", "Göteborg", "Gothenburg", "Malmö", "Uppsala", "Skåne", "Småland",
            "Värmland", "Dalarna", "Östergötland", "Västergötland", "Halland",
        ],
        regions: &["Scandinavia", "Nordic Countries"],
        historical: &[("Swedish Empire", 1611, 1721)],
    },
    Preset {
        iso2: "SI",
        iso3: "SVN",
        canonical: "Slovenia",
        aliases: &["Slovenija", "Slowenien", "Slovénie"],
        patterns: &["Ljubljana", "Laibach", "Maribor", "Carniola", "Krain", "Celje"],
        regions: &["Central Europe", "Yugoslavia", "Austria-Hungary"],
        historical: &[("Duchy of Carniola", 1364, 1918)],
    },
    Preset {
        iso2: "SK",
        iso3: "SVK",
        canonical: "Slovakia",
        aliases: &["Slovensko", "Slowakei", "Slovaquie"],
        patterns: &["Bratislava", "Pressburg", "Pozsony", "Košice", "Kaschau", "Prešov", "Nitra", "Žilina"],
        regions: &["Central Europe", "Austria-Hungary", "Czechoslovakia"],
        historical: &[("Upper Hungary", 1526, 1918)],
    },
    Preset {
        iso2: "TR",
        iso3: "TUR",
        canonical: "Turkey",
        aliases: &["Türkiye", "Türkei", "Turquie"],
        patterns: &["Istanbul", "Ankara", "Izmir", "Anatolia", "Trabzon", "Bursa"],
        regions: &["Ottoman Empire", "Asia Minor"],
        historical: &[("Constantinople", 1453, 1930), ("Smyrna", 1, 1930)],
    },
    Preset {
        iso2: "TT",
        iso3: "TTO",
        canonical: "Trinidad and Tobago",
        aliases: &["Trinidad", "Tobago", "Trinidad & Tobago"],
        patterns: &["Port of Spain", "San Fernando"],
        regions: &["West Indies", "British Empire"],
        historical: &[],
    },
    Preset {
        iso2: "UA",
        iso3: "UKR",
        canonical: "Ukraine",
        aliases: &["Ukrayina", "Ukraina"],
        patterns: &[
            "Kiev", "Kyiv", "Lviv", "Lemberg", "Lwów", "Odessa", "Odesa", "Kharkiv", "Kharkov",
            "Podolia", "Volhynia", "Halychyna", "Bukovina",
        ],
        regions: &["Eastern Europe", "Russian Empire", "Soviet Union"],
        historical: &[("Ukrainian SSR", 1922, 1991)],
    },
    Preset {
        iso2: "US",
        iso3: "USA",
        canonical: "United States",
        aliases: &["USA", "U.S.A.", "US", "United States of America", "America", "Vereinigte Staaten"],
        patterns: &[
            "New York", "Pennsylvania", "Massachusetts", "Virginia", "Ohio", "Illinois",
            "New Jersey", "Connecticut", "Maryland", "North Carolina", "South Carolina",
            "Kentucky", "Tennessee", "Texas", "California", "Wisconsin", "Michigan", "Minnesota",
            "Iowa", "Missouri", "Indiana", "Vermont", "Maine", "New Hampshire", "Rhode Island",
            "Delaware", "New Mexico", "Louisiana", "Nebraska", "Kansas", "Utah",
        ],
        regions: &["North America"],
        historical: &[
            ("New Amsterdam", 1625, 1664),
            ("New Netherland", 1614, 1667),
            ("Thirteen Colonies", 1732, 1776),
        ],
    },
    Preset {
        iso2: "ZA",
        iso3: "ZAF",
        canonical: "South Africa",
        aliases: &["Suid-Afrika", "Republic of South Africa"],
        patterns: &[
            "Cape Town", "Kaapstad", "Transvaal", "Natal", "Orange Free State", "Johannesburg",
            "Pretoria", "Durban",
        ],
        regions: &["Southern Africa", "British Empire"],
        historical: &[("Cape Colony", 1806, 1910), ("Union of South Africa", 1910, 1961)],
    },
];

pub(super) fn builtin_entries() -> Vec<(String, CountryMatchingData)> {
    PRESETS
        .iter()
        .map(|p| {
            let data = CountryMatchingData {
                canonical: p.canonical.to_string(),
                iso3: p.iso3.to_string(),
                aliases: p.aliases.iter().map(|s| s.to_string()).collect(),
                patterns: p.patterns.iter().map(|s| s.to_string()).collect(),
                regions: p.regions.iter().map(|s| s.to_string()).collect(),
                historical_names: p
                    .historical
                    .iter()
                    .map(|(name, start, end)| (name.to_string(), YearRange(*start, *end)))
                    .collect(),
            };
            (p.iso2.to_string(), data)
        })
        .collect()
}

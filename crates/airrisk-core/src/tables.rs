//! Curated lookup tables that bridge the three naming schemes in play: feed
//! keys, boundary-dataset names, and ISO 3166-1 alpha-3 codes.
//!
//! All tables are immutable and built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Feed key or display name to ISO3 code. Both the spaced spelling and the
/// concatenated feed-key spelling appear where the feed uses either.
#[rustfmt::skip]
static COUNTRY_CODES: &[(&str, &str)] = &[
    ("Afghanistan", "AFG"), ("Albania", "ALB"), ("Algeria", "DZA"), ("Angola", "AGO"),
    ("Argentina", "ARG"), ("Armenia", "ARM"), ("Aruba", "ABW"), ("Australia", "AUS"),
    ("Austria", "AUT"), ("Azerbaijan", "AZE"),
    ("Bahamas", "BHS"), ("Bahrain", "BHR"), ("Bangladesh", "BGD"), ("Barbados", "BRB"),
    ("Belarus", "BLR"), ("Belgium", "BEL"), ("Belize", "BLZ"), ("Benin", "BEN"),
    ("Bhutan", "BTN"), ("Bolivia", "BOL"), ("Bonaire", "BES"),
    ("Bosnia and Herzegovina", "BIH"), ("BosniaandHerzegovina", "BIH"),
    ("Botswana", "BWA"), ("Brazil", "BRA"), ("Brunei", "BRN"), ("Bulgaria", "BGR"),
    ("Burkina Faso", "BFA"), ("BurkinaFaso", "BFA"), ("Burundi", "BDI"),
    ("Cambodia", "KHM"), ("Cameroon", "CMR"), ("Canada", "CAN"), ("Cape Verde", "CPV"),
    ("Central African Republic", "CAF"), ("CentralAfricanRepublic", "CAF"),
    ("Chad", "TCD"), ("Chile", "CHL"), ("China", "CHN"), ("Colombia", "COL"),
    ("Congo DRC", "COD"), ("CongoDRC", "COD"), ("Costa Rica", "CRI"), ("CostaRica", "CRI"),
    ("Croatia", "HRV"), ("Cuba", "CUB"), ("Curacao", "CUW"), ("Cyprus", "CYP"),
    ("Czech Republic", "CZE"), ("CzechRepublic", "CZE"),
    ("Denmark", "DNK"), ("Djibouti", "DJI"), ("Dominican Republic", "DOM"),
    ("DominicanRepublic", "DOM"),
    ("Ecuador", "ECU"), ("Egypt", "EGY"), ("El Salvador", "SLV"), ("ElSalvador", "SLV"),
    ("Equatorial Guinea", "GNQ"), ("EquatorialGuinea", "GNQ"), ("Eritrea", "ERI"),
    ("Estonia", "EST"), ("Ethiopia", "ETH"),
    ("Fiji", "FJI"), ("Finland", "FIN"), ("France", "FRA"),
    ("Gabon", "GAB"), ("Gambia", "GMB"), ("Georgia", "GEO"), ("Germany", "DEU"),
    ("Ghana", "GHA"), ("Greece", "GRC"), ("Greenland", "GRL"), ("Guatemala", "GTM"),
    ("Guinea", "GIN"), ("Guyana", "GUY"),
    ("Haiti", "HTI"), ("Honduras", "HND"), ("Hungary", "HUN"),
    ("Iceland", "ISL"), ("India", "IND"), ("Indonesia", "IDN"), ("Iran", "IRN"),
    ("Iraq", "IRQ"), ("Ireland", "IRL"), ("Israel", "ISR"), ("Italy", "ITA"),
    ("Ivory Coast", "CIV"), ("IvoryCoast", "CIV"),
    ("Jamaica", "JAM"), ("Japan", "JPN"), ("Jordan", "JOR"),
    ("Kazakhstan", "KAZ"), ("Kenya", "KEN"), ("Kuwait", "KWT"), ("Kyrgyzstan", "KGZ"),
    ("Laos", "LAO"), ("Latvia", "LVA"), ("Lebanon", "LBN"), ("Lesotho", "LSO"),
    ("Liberia", "LBR"), ("Libya", "LBY"), ("Lithuania", "LTU"), ("Luxembourg", "LUX"),
    ("Macedonia", "MKD"), ("Madagascar", "MDG"), ("Malawi", "MWI"), ("Malaysia", "MYS"),
    ("Mali", "MLI"), ("Malta", "MLT"), ("Mauritania", "MRT"), ("Mauritius", "MUS"),
    ("Mexico", "MEX"), ("Moldova", "MDA"), ("Mongolia", "MNG"), ("Montenegro", "MNE"),
    ("Morocco", "MAR"), ("Mozambique", "MOZ"), ("Myanmar", "MMR"),
    ("Namibia", "NAM"), ("Nepal", "NPL"), ("Netherlands", "NLD"),
    ("New Zealand", "NZL"), ("NewZealand", "NZL"), ("Nicaragua", "NIC"), ("Niger", "NER"),
    ("Nigeria", "NGA"), ("North Korea", "PRK"), ("NorthKorea", "PRK"), ("Norway", "NOR"),
    ("Oman", "OMN"),
    ("Pakistan", "PAK"), ("Panama", "PAN"), ("Papua New Guinea", "PNG"),
    ("PapuaNewGuinea", "PNG"), ("Paraguay", "PRY"), ("Peru", "PER"),
    ("Philippines", "PHL"), ("Poland", "POL"), ("Portugal", "PRT"),
    ("Puerto Rico", "PRI"), ("PuertoRico", "PRI"),
    ("Qatar", "QAT"),
    ("Romania", "ROU"), ("Russia", "RUS"), ("Rwanda", "RWA"),
    ("Saudi Arabia", "SAU"), ("SaudiArabia", "SAU"), ("Senegal", "SEN"), ("Serbia", "SRB"),
    ("Sierra Leone", "SLE"), ("SierraLeone", "SLE"), ("Singapore", "SGP"),
    ("Slovakia", "SVK"), ("Slovenia", "SVN"), ("Somalia", "SOM"),
    ("South Africa", "ZAF"), ("SouthAfrica", "ZAF"),
    ("South Korea", "KOR"), ("SouthKorea", "KOR"), ("South Sudan", "SSD"),
    ("SouthSudan", "SSD"), ("Spain", "ESP"), ("Sri Lanka", "LKA"), ("SriLanka", "LKA"),
    ("Sudan", "SDN"), ("Suriname", "SUR"), ("Swaziland", "SWZ"), ("Sweden", "SWE"),
    ("Switzerland", "CHE"), ("Syria", "SYR"),
    ("Taiwan", "TWN"), ("Tajikistan", "TJK"), ("Tanzania", "TZA"), ("Thailand", "THA"),
    ("Togo", "TGO"), ("Trinidad and Tobago", "TTO"), ("TrinidadandTobago", "TTO"),
    ("Tunisia", "TUN"), ("Turkey", "TUR"), ("Turkmenistan", "TKM"),
    ("Uganda", "UGA"), ("Ukraine", "UKR"), ("United Arab Emirates", "ARE"),
    ("UnitedArabEmirates", "ARE"), ("United Kingdom", "GBR"), ("UnitedKingdom", "GBR"),
    ("United States", "USA"), ("UnitedStates", "USA"), ("Uruguay", "URY"),
    ("Uzbekistan", "UZB"),
    ("Vanuatu", "VUT"), ("Venezuela", "VEN"), ("Vietnam", "VNM"),
    ("Western Sahara", "ESH"), ("WesternSahara", "ESH"),
    ("Yemen", "YEM"),
    ("Zambia", "ZMB"), ("Zimbabwe", "ZWE"),
];

const CENTRAL_AMERICA: &[&str] = &["GTM", "BLZ", "HND", "SLV", "NIC", "CRI", "PAN"];
const CARIBBEAN: &[&str] = &["CUB", "JAM", "HTI", "DOM", "PRI", "BHS", "TTO", "BRB"];
const SOUTH_AMERICA: &[&str] = &[
    "BRA", "ARG", "COL", "PER", "VEN", "CHL", "ECU", "BOL", "PRY", "URY", "GUY", "SUR",
];
const WEST_AFRICA: &[&str] = &[
    "NGA", "GHA", "CIV", "SEN", "MLI", "BFA", "NER", "GIN", "BEN", "TGO", "SLE", "LBR", "GMB",
    "GNB", "MRT",
];
const EAST_AFRICA: &[&str] = &[
    "KEN", "TZA", "UGA", "ETH", "RWA", "BDI", "SSD", "SOM", "ERI", "DJI",
];
const HORN_OF_AFRICA: &[&str] = &["ETH", "SOM", "ERI", "DJI"];
const SAHEL: &[&str] = &["MLI", "NER", "TCD", "BFA", "MRT", "SEN", "SDN"];
const NORTH_AFRICA: &[&str] = &["MAR", "DZA", "TUN", "LBY", "EGY"];
const SOUTHERN_AFRICA: &[&str] = &["ZAF", "NAM", "BWA", "ZWE", "MOZ", "ZMB", "MWI", "LSO", "SWZ"];
const CENTRAL_AFRICA: &[&str] = &["COD", "CAF", "CMR", "GAB", "COG", "GNQ", "TCD"];
const MIDDLE_EAST: &[&str] = &[
    "SAU", "ARE", "QAT", "KWT", "BHR", "OMN", "YEM", "IRQ", "SYR", "JOR", "LBN", "ISR", "PSE",
];
const GULF_STATES: &[&str] = &["SAU", "ARE", "QAT", "KWT", "BHR", "OMN"];
const LEVANT: &[&str] = &["SYR", "LBN", "JOR", "ISR", "PSE"];
const PERSIAN_GULF: &[&str] = &["SAU", "ARE", "QAT", "KWT", "BHR", "OMN", "IRN", "IRQ"];
const BALKANS: &[&str] = &["SRB", "HRV", "BIH", "MNE", "MKD", "ALB", "SVN", "BGR", "ROU"];
const BALTIC_STATES: &[&str] = &["EST", "LVA", "LTU"];
const CAUCASUS: &[&str] = &["GEO", "ARM", "AZE"];
const EASTERN_EUROPE: &[&str] = &["UKR", "BLR", "MDA", "POL", "CZE", "SVK", "HUN", "ROU", "BGR"];
const NORDIC: &[&str] = &["NOR", "SWE", "DNK", "FIN", "ISL"];
const SOUTHEAST_ASIA: &[&str] = &[
    "THA", "VNM", "MMR", "KHM", "LAO", "MYS", "SGP", "IDN", "PHL", "BRN",
];
const SOUTH_ASIA: &[&str] = &["IND", "PAK", "BGD", "LKA", "NPL", "BTN", "MDV"];
const CENTRAL_ASIA: &[&str] = &["KAZ", "UZB", "TKM", "TJK", "KGZ", "AFG"];
const EAST_ASIA: &[&str] = &["CHN", "JPN", "KOR", "PRK", "MNG", "TWN"];
const OCEANIA: &[&str] = &["AUS", "NZL", "PNG", "FJI", "VUT"];
const MELANESIA: &[&str] = &["PNG", "FJI", "VUT", "SLB"];
const POLYNESIA: &[&str] = &["NZL", "WSM", "TON"];

/// Multi-country advisory names and their constituent ISO3 codes, in the
/// order the composite geometry is assembled.
static REGION_ALIASES: &[(&str, &[&str])] = &[
    ("CentralAmerica", CENTRAL_AMERICA),
    ("Central America", CENTRAL_AMERICA),
    ("Caribbean", CARIBBEAN),
    ("SouthAmerica", SOUTH_AMERICA),
    ("South America", SOUTH_AMERICA),
    ("WestAfrica", WEST_AFRICA),
    ("West Africa", WEST_AFRICA),
    ("EastAfrica", EAST_AFRICA),
    ("East Africa", EAST_AFRICA),
    ("HornofAfrica", HORN_OF_AFRICA),
    ("Horn of Africa", HORN_OF_AFRICA),
    ("Sahel", SAHEL),
    ("NorthAfrica", NORTH_AFRICA),
    ("North Africa", NORTH_AFRICA),
    ("SouthernAfrica", SOUTHERN_AFRICA),
    ("Southern Africa", SOUTHERN_AFRICA),
    ("CentralAfrica", CENTRAL_AFRICA),
    ("Central Africa", CENTRAL_AFRICA),
    ("MiddleEast", MIDDLE_EAST),
    ("Middle East", MIDDLE_EAST),
    ("GulfStates", GULF_STATES),
    ("Gulf States", GULF_STATES),
    ("Levant", LEVANT),
    ("PersianGulf", PERSIAN_GULF),
    ("Persian Gulf", PERSIAN_GULF),
    ("Balkans", BALKANS),
    ("BalticStates", BALTIC_STATES),
    ("Baltic States", BALTIC_STATES),
    ("Baltics", BALTIC_STATES),
    ("Caucasus", CAUCASUS),
    ("EasternEurope", EASTERN_EUROPE),
    ("Eastern Europe", EASTERN_EUROPE),
    ("Scandinavia", NORDIC),
    ("Nordic", NORDIC),
    ("SoutheastAsia", SOUTHEAST_ASIA),
    ("Southeast Asia", SOUTHEAST_ASIA),
    ("SouthAsia", SOUTH_ASIA),
    ("South Asia", SOUTH_ASIA),
    ("CentralAsia", CENTRAL_ASIA),
    ("Central Asia", CENTRAL_ASIA),
    ("EastAsia", EAST_ASIA),
    ("East Asia", EAST_ASIA),
    ("Oceania", OCEANIA),
    ("Pacific", OCEANIA),
    ("Melanesia", MELANESIA),
    ("Polynesia", POLYNESIA),
];

/// Concatenated feed keys whose readable spelling cannot be recovered mechanically.
static DISPLAY_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("UnitedArabEmirates", "United Arab Emirates"),
    ("CentralAfricanRepublic", "Central African Republic"),
    ("SaudiArabia", "Saudi Arabia"),
    ("SouthKorea", "South Korea"),
    ("NorthKorea", "North Korea"),
    ("SouthSudan", "South Sudan"),
    ("WesternSahara", "Western Sahara"),
    ("PuertoRico", "Puerto Rico"),
    ("CongoDRC", "Congo DRC"),
    ("SriLanka", "Sri Lanka"),
    ("NewZealand", "New Zealand"),
    ("BurkinaFaso", "Burkina Faso"),
    ("SierraLeone", "Sierra Leone"),
    ("IvoryCoast", "Ivory Coast"),
    ("EquatorialGuinea", "Equatorial Guinea"),
    ("BosniaandHerzegovina", "Bosnia and Herzegovina"),
    ("TrinidadandTobago", "Trinidad and Tobago"),
    ("ElSalvador", "El Salvador"),
    ("CostaRica", "Costa Rica"),
    ("DominicanRepublic", "Dominican Republic"),
    ("CzechRepublic", "Czech Republic"),
    ("UnitedKingdom", "United Kingdom"),
    ("UnitedStates", "United States"),
    ("CentralAmerica", "Central America"),
];

/// Detail-page slugs for names where lower-casing and hyphenating the name
/// would not produce the site's URL.
static SLUG_OVERRIDES: &[(&str, &str)] = &[
    ("CentralAfricanRepublic", "central-african-republic"),
    ("UnitedArabEmirates", "united-arab-emirates"),
    ("CongoDRC", "congo-drc"),
    ("NorthKorea", "north-korea"),
    ("SouthKorea", "south-korea"),
    ("SouthSudan", "south-sudan"),
    ("SaudiArabia", "saudi-arabia"),
    ("WesternSahara", "western-sahara"),
    ("PuertoRico", "puerto-rico"),
    ("CentralAmerica", "central-america"),
    ("SriLanka", "sri-lanka"),
    ("NewZealand", "new-zealand"),
    ("PapuaNewGuinea", "papua-new-guinea"),
    ("BurkinaFaso", "burkina-faso"),
    ("SierraLeone", "sierra-leone"),
    ("IvoryCoast", "ivory-coast"),
    ("EquatorialGuinea", "equatorial-guinea"),
    ("TrinidadandTobago", "trinidad-and-tobago"),
    ("BosniaandHerzegovina", "bosnia-and-herzegovina"),
    ("ElSalvador", "el-salvador"),
    ("CostaRica", "costa-rica"),
    ("DominicanRepublic", "dominican-republic"),
    ("CzechRepublic", "czech-republic"),
    ("UnitedKingdom", "united-kingdom"),
    ("UnitedStates", "united-states"),
];

static COUNTRY_CODE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COUNTRY_CODES.iter().copied().collect());

static REGION_ALIAS_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| REGION_ALIASES.iter().copied().collect());

static DISPLAY_NAME_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DISPLAY_NAME_OVERRIDES.iter().copied().collect());

static SLUG_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SLUG_OVERRIDES.iter().copied().collect());

/// ISO3 code for a feed key or display name.
#[must_use]
pub fn iso3_for_name(name: &str) -> Option<&'static str> {
    COUNTRY_CODE_MAP.get(name).copied()
}

/// Constituent ISO3 codes when `name` denotes a multi-country region.
#[must_use]
pub fn region_members(name: &str) -> Option<&'static [&'static str]> {
    REGION_ALIAS_MAP.get(name).copied()
}

#[must_use]
pub fn display_name_override(key: &str) -> Option<&'static str> {
    DISPLAY_NAME_MAP.get(key).copied()
}

/// URL slug of a country's detail page.
///
/// Uses the curated override when present, otherwise lower-cases the name and
/// replaces each whitespace run with a hyphen (`Costa Rica` -> `costa-rica`).
#[must_use]
pub fn detail_page_slug(name: &str) -> String {
    if let Some(slug) = SLUG_MAP.get(name) {
        return (*slug).to_string();
    }
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

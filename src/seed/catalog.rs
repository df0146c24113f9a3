//! Built-in region and category identifiers used for seeding

/// Prefecture slugs, north to south
pub const REGIONS: &[&str] = &[
    "hokkaido",
    "aomori",
    "iwate",
    "miyagi",
    "akita",
    "yamagata",
    "fukushima",
    "ibaraki",
    "tochigi",
    "gunma",
    "saitama",
    "chiba",
    "tokyo",
    "kanagawa",
    "niigata",
    "toyama",
    "ishikawa",
    "fukui",
    "yamanashi",
    "nagano",
    "gifu",
    "shizuoka",
    "aichi",
    "mie",
    "shiga",
    "kyoto",
    "osaka",
    "hyogo",
    "nara",
    "wakayama",
    "tottori",
    "shimane",
    "okayama",
    "hiroshima",
    "yamaguchi",
    "tokushima",
    "kagawa",
    "ehime",
    "kochi",
    "fukuoka",
    "saga",
    "nagasaki",
    "kumamoto",
    "oita",
    "miyazaki",
    "kagoshima",
    "okinawa",
];

/// Genre identifiers: top-level slugs and `RC`/`MC`/`SC` sub-genre codes
pub const CATEGORIES: &[&str] = &[
    "japanese",  // Japanese cuisine
    "RC0102",    // sushi, seafood
    "RC0103",    // tempura, fried food
    "RC0104",    // soba, udon, noodles
    "RC0105",    // eel, loach
    "RC0106",    // yakitori, skewers, chicken
    "RC0107",    // sukiyaki, shabu-shabu
    "RC0108",    // oden
    "RC0109",    // okonomiyaki, takoyaki
    "RC0110",    // regional cuisine
    "RC0111",    // rice bowls
    "RC0199",    // Japanese (other)
    "RC0201",    // steak, hamburg steak
    "RC0203",    // teppanyaki
    "RC0202",    // pasta, pizza
    "hamburger", // hamburgers
    "RC0209",    // yoshoku, European
    "french",    // French
    "italian",   // Italian
    "RC0219",    // other Western
    "RC0301",    // Chinese
    "RC0302",    // gyoza, buns
    "RC0303",    // Chinese congee
    "RC0304",    // Chinese noodles
    "korea",     // Korean
    "RC0402",    // Southeast Asian
    "RC0403",    // South Asian
    "RC0404",    // West Asian
    "RC0411",    // Latin American
    "RC0412",    // African
    "RC0499",    // Asian, ethnic (other)
    "RC1201",    // curry rice
    "RC1202",    // European curry
    "RC1203",    // Indian curry
    "RC1204",    // Thai curry
    "RC1205",    // soup curry
    "RC1299",    // curry (other)
    "RC1301",    // yakiniku, offal
    "RC1302",    // jingisukan
    "nabe",      // hot pot
    "izakaya",   // izakaya
    "RC2102",    // dining bar
    "RC2199",    // izakaya, dining bar (other)
    "RC9901",    // set meals, diners
    "RC9902",    // fusion
    "RC9903",    // natural food, medicinal
    "RC9904",    // bento, onigiri
    "RC9999",    // restaurants (other)
    "ramen",     // ramen
    "MC11",      // tsukemen
    "SC0101",    // bread
    "SC0201",    // Western sweets
    "SC0202",    // Japanese sweets
    "SC0203",    // Chinese sweets
    "SC0299",    // sweets (other)
];

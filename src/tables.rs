//! Static lookup tables consulted by the dispatcher.
//!
//! Pure data: the language-code table behind `!lang`, the conversational
//! reply table, and the URL builders behind the link commands. The reply
//! table entries may reference `{nick}` and `{master}`; the dispatcher
//! substitutes those at construction time.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Wikipedia-style language code to language name.
pub static LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("sv", "Swedish"),
    ("de", "German"),
    ("nl", "Dutch"),
    ("fr", "French"),
    ("war", "Waray-Waray"),
    ("ru", "Russian"),
    ("it", "Italian"),
    ("ceb", "Cebuano"),
    ("es", "Spanish"),
    ("vi", "Vietnamese"),
    ("pl", "Polish"),
    ("ja", "Japanese"),
    ("pt", "Portuguese"),
    ("zh", "Chinese"),
    ("uk", "Ukrainian"),
    ("ca", "Catalan"),
    ("fa", "Persian"),
    ("sh", "Serbo-Croatian"),
    ("no", "Norwegian"),
    ("ar", "Arabic"),
    ("fi", "Finnish"),
    ("id", "Indonesian"),
    ("ro", "Romanian"),
    ("hu", "Hungarian"),
    ("cs", "Czech"),
    ("ko", "Korean"),
    ("sr", "Serbian"),
    ("ms", "Malay"),
    ("tr", "Turkish"),
    ("min", "Minangkabau"),
    ("eo", "Esperanto"),
    ("kk", "Kazakh"),
    ("eu", "Basque"),
    ("da", "Danish"),
    ("sk", "Slovak"),
    ("bg", "Bulgarian"),
    ("hy", "Armenian"),
    ("he", "Hebrew"),
    ("lt", "Lithuanian"),
    ("hr", "Croatian"),
    ("sl", "Slovenian"),
    ("et", "Estonian"),
    ("uz", "Uzbek"),
    ("gl", "Galician"),
    ("nn", "Norwegian (Nynorsk)"),
    ("vo", "Volapuk"),
    ("la", "Latin"),
    ("simple", "Simple English"),
    ("el", "Greek"),
    ("hi", "Hindi"),
    ("ce", "Chechen"),
    ("be", "Belarusian"),
    ("az", "Azerbaijani"),
    ("ka", "Georgian"),
    ("th", "Thai"),
    ("oc", "Occitan"),
    ("mk", "Macedonian"),
    ("mg", "Malagasy"),
    ("ur", "Urdu"),
    ("new", "Newar"),
    ("ta", "Tamil"),
    ("tt", "Tatar"),
    ("cy", "Welsh"),
    ("pms", "Piedmontese"),
    ("tl", "Tagalog"),
    ("bs", "Bosnian"),
    ("lv", "Latvian"),
    ("te", "Telugu"),
    ("be-x-old", "Belarusian (Taraskievica)"),
    ("br", "Breton"),
    ("ht", "Haitian"),
    ("sq", "Albanian"),
    ("jv", "Javanese"),
    ("lb", "Luxembourgish"),
    ("mr", "Marathi"),
    ("ml", "Malayalam"),
    ("is", "Icelandic"),
    ("zh-yue", "Cantonese"),
    ("bn", "Bengali"),
    ("af", "Afrikaans"),
    ("ga", "Irish"),
    ("ba", "Bashkir"),
    ("ky", "Kirghiz"),
    ("pnb", "Western Punjabi"),
    ("cv", "Chuvash"),
    ("tg", "Tajik"),
    ("sco", "Scots"),
    ("fy", "West Frisian"),
    ("lmo", "Lombard"),
    ("my", "Burmese"),
    ("yo", "Yoruba"),
    ("an", "Aragonese"),
    ("sw", "Swahili"),
    ("ne", "Nepali"),
    ("ast", "Asturian"),
    ("zh-min-nan", "Min Nan"),
    ("io", "Ido"),
    ("gu", "Gujarati"),
    ("scn", "Sicilian"),
    ("bpy", "Bishnupriya Manipuri"),
    ("nds", "Low Saxon"),
    ("ku", "Kurdish"),
    ("als", "Alemannic"),
    ("qu", "Quechua"),
    ("su", "Sundanese"),
    ("pa", "Punjabi"),
    ("kn", "Kannada"),
    ("ckb", "Sorani"),
    ("mn", "Mongolian"),
    ("bar", "Bavarian"),
    ("ia", "Interlingua"),
    ("nap", "Neapolitan"),
    ("arz", "Egyptian Arabic"),
    ("bug", "Buginese"),
    ("bat-smg", "Samogitian"),
    ("wa", "Walloon"),
    ("gd", "Scottish Gaelic"),
    ("am", "Amharic"),
    ("map-bms", "Banyumasan"),
    ("yi", "Yiddish"),
    ("mzn", "Mazandarani"),
    ("si", "Sinhalese"),
    ("fo", "Faroese"),
    ("nah", "Nahuatl"),
    ("vec", "Venetian"),
    ("sah", "Sakha"),
    ("os", "Ossetian"),
    ("mrj", "Hill Mari"),
    ("sa", "Sanskrit"),
    ("li", "Limburgish"),
    ("hsb", "Upper Sorbian"),
    ("roa-tara", "Tarantino"),
    ("or", "Oriya"),
    ("pam", "Kapampangan"),
    ("mhr", "Meadow Mari"),
    ("se", "Northern Sami"),
    ("mi", "Maori"),
    ("ilo", "Ilokano"),
    ("bcl", "Central Bicolano"),
    ("hif", "Fiji Hindi"),
    ("gan", "Gan"),
    ("ps", "Pashto"),
    ("rue", "Rusyn"),
    ("glk", "Gilaki"),
    ("nds-nl", "Dutch Low Saxon"),
    ("diq", "Zazaki"),
    ("bo", "Tibetan"),
    ("azb", "South Azerbaijani"),
    ("vls", "West Flemish"),
    ("bh", "Bihari"),
    ("fiu-vro", "Voro"),
    ("xmf", "Mingrelian"),
    ("co", "Corsican"),
    ("tk", "Turkmen"),
    ("sc", "Sardinian"),
    ("gv", "Manx"),
    ("vep", "Vepsian"),
    ("km", "Khmer"),
    ("hak", "Hakka"),
    ("csb", "Kashubian"),
    ("lrc", "Northern Luri"),
    ("kv", "Komi"),
    ("zea", "Zeelandic"),
    ("crh", "Crimean Tatar"),
    ("frr", "North Frisian"),
    ("zh-classical", "Classical Chinese"),
    ("eml", "Emilian-Romagnol"),
    ("wuu", "Wu"),
    ("ay", "Aymara"),
    ("udm", "Udmurt"),
    ("stq", "Saterland Frisian"),
    ("kw", "Cornish"),
    ("nrm", "Norman"),
    ("as", "Assamese"),
    ("rm", "Romansh"),
    ("szl", "Silesian"),
    ("so", "Somali"),
    ("koi", "Komi-Permyak"),
    ("lad", "Ladino"),
    ("sd", "Sindhi"),
    ("fur", "Friulian"),
    ("mt", "Maltese"),
    ("ie", "Interlingue"),
    ("gn", "Guarani"),
    ("pcd", "Picard"),
    ("dv", "Divehi"),
    ("dsb", "Lower Sorbian"),
    ("lij", "Ligurian"),
    ("cbk-zam", "Zamboanga Chavacano"),
    ("cdo", "Min Dong"),
    ("ksh", "Ripuarian"),
    ("ext", "Extremaduran"),
    ("gag", "Gagauz"),
    ("mwl", "Mirandese"),
    ("ang", "Anglo-Saxon"),
    ("lez", "Lezgian"),
    ("ug", "Uyghur"),
    ("ace", "Acehnese"),
    ("pi", "Pali"),
    ("pag", "Pangasinan"),
    ("nv", "Navajo"),
    ("frp", "Franco-Provencal"),
    ("sn", "Shona"),
    ("kab", "Kabyle"),
    ("myv", "Erzya"),
    ("ln", "Lingala"),
    ("pfl", "Palatinate German"),
    ("xal", "Kalmyk"),
    ("krc", "Karachay-Balkar"),
    ("haw", "Hawaiian"),
    ("rw", "Kinyarwanda"),
    ("pdc", "Pennsylvania German"),
    ("kaa", "Karakalpak"),
    ("to", "Tongan"),
    ("kl", "Greenlandic"),
    ("arc", "Aramaic"),
    ("nov", "Novial"),
    ("kbd", "Kabardian Circassian"),
    ("av", "Avar"),
    ("bxr", "Buryat"),
    ("lo", "Lao"),
    ("bjn", "Banjar"),
    ("ha", "Hausa"),
    ("tet", "Tetum"),
    ("pap", "Papiamentu"),
    ("tpi", "Tok Pisin"),
    ("na", "Nauruan"),
    ("tyv", "Tuvan"),
    ("lbe", "Lak"),
    ("jbo", "Lojban"),
    ("ty", "Tahitian"),
    ("roa-rup", "Aromanian"),
    ("mdf", "Moksha"),
    ("za", "Zhuang"),
    ("ig", "Igbo"),
    ("wo", "Wolof"),
    ("nso", "Northern Sotho"),
    ("srn", "Sranan"),
    ("kg", "Kongo"),
    ("ab", "Abkhazian"),
    ("ltg", "Latgalian"),
    ("zu", "Zulu"),
    ("om", "Oromo"),
    ("chy", "Cheyenne"),
    ("rmy", "Romani"),
    ("cu", "Old Church Slavonic"),
    ("tw", "Twi"),
    ("mai", "Maithili"),
    ("gom", "Goan Konkani"),
    ("tn", "Tswana"),
    ("chr", "Cherokee"),
    ("pih", "Norfolk"),
    ("bi", "Bislama"),
    ("got", "Gothic"),
    ("sm", "Samoan"),
    ("ss", "Swati"),
    ("mo", "Moldovan"),
    ("rn", "Kirundi"),
    ("ki", "Kikuyu"),
    ("xh", "Xhosa"),
    ("pnt", "Pontic"),
    ("bm", "Bambara"),
    ("iu", "Inuktitut"),
    ("ee", "Ewe"),
    ("lg", "Luganda"),
    ("ts", "Tsonga"),
    ("st", "Sesotho"),
    ("ks", "Kashmiri"),
    ("ak", "Akan"),
    ("fj", "Fijian"),
    ("ik", "Inupiak"),
    ("sg", "Sango"),
    ("ff", "Fula"),
    ("dz", "Dzongkha"),
    ("ny", "Chichewa"),
    ("ti", "Tigrinya"),
    ("ch", "Chamorro"),
    ("ve", "Venda"),
    ("tum", "Tumbuka"),
    ("cr", "Cree"),
    ("ng", "Ndonga"),
    ("cho", "Choctaw"),
    ("kj", "Kuanyama"),
    ("mh", "Marshallese"),
    ("ho", "Hiri Motu"),
    ("ii", "Sichuan Yi"),
    ("aa", "Afar"),
    ("mus", "Muscogee"),
    ("hz", "Herero"),
    ("kr", "Kanuri"),
];

lazy_static! {
    static ref LANGUAGE_INDEX: HashMap<&'static str, &'static str> =
        LANGUAGES.iter().copied().collect();
}

/// Look up a normalized language code. One map access, O(1).
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGE_INDEX.get(code).copied()
}

/// Trigger word to canned reply for conversational matches.
pub static REPLIES: &[(&str, &str)] = &[
    ("die", "No, you"),
    ("goodbye", "I'll miss you"),
    ("sayonara", "I'll miss you"),
    ("scram", "No, you"),
    ("shout", "NO I WON'T"),
    ("dance", "*{nick} dances*"),
    ("hello", "Hi"),
    ("howdy", "Hi"),
    ("time", "It is TIME for a RHYME"),
    ("master", "{master} is my master"),
];

/// Global user contributions lookup for a wiki user.
pub fn guc_url(user: &str) -> String {
    format!("https://tools.wmflabs.org/guc/?user={}&blocks=true", user)
}

/// CentralAuth page for a wiki user.
pub fn cauth_url(user: &str) -> String {
    format!(
        "https://meta.wikimedia.org/wiki/Special:CentralAuth/{}",
        user
    )
}

/// Short link under the bot's own domain.
pub fn link_url(path: &str) -> String {
    format!("http://avicbot.org/{}", path)
}

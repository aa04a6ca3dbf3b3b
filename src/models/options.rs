/// One entry of a dropdown. Labels carry the English and Hindi name side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Label for `value`, or the value itself if it is not listed
pub fn label_for(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// English half of a bilingual label
pub fn english_label(options: &[SelectOption], value: &str) -> String {
    let label = label_for(options, value);
    match label.split_once(" / ") {
        Some((english, _)) => english.to_string(),
        None => label,
    }
}

pub const STATES: &[SelectOption] = &[
    opt("andhra-pradesh", "Andhra Pradesh / आंध्र प्रदेश"),
    opt("bihar", "Bihar / बिहार"),
    opt("gujarat", "Gujarat / गुजरात"),
    opt("haryana", "Haryana / हरियाणा"),
    opt("karnataka", "Karnataka / कर्नाटक"),
    opt("madhya-pradesh", "Madhya Pradesh / मध्य प्रदेश"),
    opt("maharashtra", "Maharashtra / महाराष्ट्र"),
    opt("punjab", "Punjab / पंजाब"),
    opt("rajasthan", "Rajasthan / राजस्थान"),
    opt("tamil-nadu", "Tamil Nadu / तमिल नाडु"),
    opt("uttar-pradesh", "Uttar Pradesh / उत्तर प्रदेश"),
    opt("west-bengal", "West Bengal / पश्चिम बंगाल"),
];

const MAHARASHTRA: &[SelectOption] = &[
    opt("mumbai", "Mumbai / मुंबई"),
    opt("pune", "Pune / पुणे"),
    opt("nagpur", "Nagpur / नागपुर"),
    opt("nashik", "Nashik / नाशिक"),
];

const UTTAR_PRADESH: &[SelectOption] = &[
    opt("lucknow", "Lucknow / लखनऊ"),
    opt("kanpur", "Kanpur / कानपुर"),
    opt("agra", "Agra / आगरा"),
    opt("varanasi", "Varanasi / वाराणसी"),
];

const GUJARAT: &[SelectOption] = &[
    opt("ahmedabad", "Ahmedabad / अहमदाबाद"),
    opt("surat", "Surat / सूरत"),
    opt("vadodara", "Vadodara / वडोदरा"),
    opt("rajkot", "Rajkot / राजकोट"),
];

const PUNJAB: &[SelectOption] = &[
    opt("chandigarh", "Chandigarh / चंडीगढ़"),
    opt("ludhiana", "Ludhiana / लुधियाना"),
    opt("amritsar", "Amritsar / अमृतसर"),
    opt("jalandhar", "Jalandhar / जालंधर"),
];

/// Cities offered for a state. Most states have none listed.
pub fn cities_for(state: &str) -> &'static [SelectOption] {
    match state {
        "maharashtra" => MAHARASHTRA,
        "uttar-pradesh" => UTTAR_PRADESH,
        "gujarat" => GUJARAT,
        "punjab" => PUNJAB,
        _ => &[],
    }
}

pub const PESTICIDE_CROPS: &[SelectOption] = &[
    opt("wheat", "Wheat / गेहूं"),
    opt("rice", "Rice / चावल"),
    opt("corn", "Corn / मक्का"),
    opt("cotton", "Cotton / कपास"),
    opt("sugarcane", "Sugarcane / गन्ना"),
    opt("potato", "Potato / आलू"),
    opt("tomato", "Tomato / टमाटर"),
    opt("onion", "Onion / प्याज"),
];

pub const PESTS: &[SelectOption] = &[
    opt("aphids", "Aphids / माहू"),
    opt("caterpillars", "Caterpillars / इल्ली"),
    opt("whitefly", "Whitefly / सफेद मक्खी"),
    opt("thrips", "Thrips / थ्रिप्स"),
    opt("fungal-disease", "Fungal Disease / फंगल रोग"),
    opt("bacterial-blight", "Bacterial Blight / जीवाणु अंगमारी"),
    opt("rust", "Rust / रतुआ"),
    opt("stem-borer", "Stem Borer / तना छेदक"),
];

pub const SEVERITIES: &[SelectOption] = &[
    opt("low", "Low (0-25% damage) / कम"),
    opt("medium", "Medium (25-50% damage) / मध्यम"),
    opt("high", "High (50-75% damage) / अधिक"),
    opt("severe", "Severe (75%+ damage) / गंभीर"),
];

pub const CHEMICAL_CROPS: &[SelectOption] = &[
    opt("wheat", "Wheat / गेहूं"),
    opt("rice", "Rice / चावल"),
    opt("corn", "Corn / मक्का"),
    opt("cotton", "Cotton / कपास"),
    opt("sugarcane", "Sugarcane / गन्ना"),
    opt("potato", "Potato / आलू"),
    opt("tomato", "Tomato / टमाटर"),
    opt("soybean", "Soybean / सोयाबीन"),
];

pub const SOILS: &[SelectOption] = &[
    opt("clay", "Clay / चिकनी मिट्टी"),
    opt("sandy", "Sandy / बलुई मिट्टी"),
    opt("loamy", "Loamy / दोमट मिट्टी"),
    opt("silty", "Silty / गाद मिट्टी"),
    opt("black", "Black Cotton / काली कपास मिट्टी"),
    opt("red", "Red / लाल मिट्टी"),
];

pub const GROWTH_STAGES: &[SelectOption] = &[
    opt("sowing", "Sowing / बुआई"),
    opt("germination", "Germination / अंकुरण"),
    opt("vegetative", "Vegetative / वानस्पतिक"),
    opt("flowering", "Flowering / फूल आना"),
    opt("fruiting", "Fruiting / फल लगना"),
    opt("maturation", "Maturation / पकना"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_states() {
        assert_eq!(STATES.len(), 12);
        assert!(STATES.iter().any(|s| s.value == "maharashtra"));
    }

    #[test]
    fn test_cities_for_state() {
        let values: Vec<_> = cities_for("maharashtra").iter().map(|c| c.value).collect();
        assert_eq!(values, ["mumbai", "pune", "nagpur", "nashik"]);
        assert!(cities_for("bihar").is_empty());
        assert!(cities_for("").is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_for(STATES, "punjab"), "Punjab / पंजाब");
        assert_eq!(english_label(cities_for("maharashtra"), "mumbai"), "Mumbai");
        assert_eq!(label_for(STATES, "atlantis"), "atlantis");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PesticideKind {
    Organic,
    Chemical,
}

impl PesticideKind {
    pub fn message_key(&self) -> &'static str {
        match self {
            PesticideKind::Organic => "pesticide-organic",
            PesticideKind::Chemical => "pesticide-chemical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostLevel {
    Low,
    Medium,
    High,
}

impl CostLevel {
    pub fn message_key(&self) -> &'static str {
        match self {
            CostLevel::Low => "cost-low",
            CostLevel::Medium => "cost-medium",
            CostLevel::High => "cost-high",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PesticideRecommendation {
    pub name: String,
    pub kind: PesticideKind,
    /// Percent
    pub effectiveness: u8,
    pub cost: CostLevel,
    pub dosage: String,
    pub application_method: String,
    pub timing: String,
    pub precautions: Vec<String>,
    pub active_ingredient: String,
}

impl PesticideRecommendation {
    /// The three fixed demo recommendations
    pub fn samples() -> Vec<Self> {
        vec![
            Self {
                name: "Neem Oil".to_string(),
                kind: PesticideKind::Organic,
                effectiveness: 85,
                cost: CostLevel::Low,
                dosage: "2-3 ml per liter of water".to_string(),
                application_method: "Foliar spray".to_string(),
                timing: "Early morning or evening".to_string(),
                precautions: vec![
                    "Avoid spraying during flowering".to_string(),
                    "Test on small area first".to_string(),
                ],
                active_ingredient: "Azadirachtin".to_string(),
            },
            Self {
                name: "Bacillus thuringiensis (Bt)".to_string(),
                kind: PesticideKind::Organic,
                effectiveness: 90,
                cost: CostLevel::Medium,
                dosage: "1-2 grams per liter".to_string(),
                application_method: "Foliar spray".to_string(),
                timing: "When larvae are young".to_string(),
                precautions: vec![
                    "Store in cool, dry place".to_string(),
                    "Use within 2 years".to_string(),
                ],
                active_ingredient: "Bt protein crystals".to_string(),
            },
            Self {
                name: "Imidacloprid".to_string(),
                kind: PesticideKind::Chemical,
                effectiveness: 95,
                cost: CostLevel::Medium,
                dosage: "0.3-0.5 ml per liter".to_string(),
                application_method: "Soil application or spray".to_string(),
                timing: "Before pest infestation".to_string(),
                precautions: vec![
                    "Wear protective gear".to_string(),
                    "Keep away from water sources".to_string(),
                    "Follow PHI period".to_string(),
                ],
                active_ingredient: "Imidacloprid 17.8% SL".to_string(),
            },
        ]
    }
}

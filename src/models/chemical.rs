#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientStatus {
    Deficient,
    Adequate,
    Excessive,
}

impl NutrientStatus {
    pub fn message_key(&self) -> &'static str {
        match self {
            NutrientStatus::Deficient => "nutrient-deficient",
            NutrientStatus::Adequate => "nutrient-adequate",
            NutrientStatus::Excessive => "nutrient-excessive",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NutrientStatus::Deficient => "#c62828",
            NutrientStatus::Adequate => "#2e7d32",
            NutrientStatus::Excessive => "#f9a825",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientLevel {
    /// 0-100
    pub level: u8,
    pub status: NutrientStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpkLevels {
    pub nitrogen: NutrientLevel,
    pub phosphorus: NutrientLevel,
    pub potassium: NutrientLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Micronutrient {
    pub name: String,
    pub status: NutrientStatus,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledApplication {
    pub week: u32,
    pub fertilizer: String,
    pub quantity: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostItem {
    pub item: String,
    /// Rupees
    pub cost: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimate {
    pub total: u32,
    pub breakdown: Vec<CostItem>,
}

/// Fertilizer plan for one field
#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalRecommendation {
    pub npk: NpkLevels,
    pub micronutrients: Vec<Micronutrient>,
    pub schedule: Vec<ScheduledApplication>,
    pub cost: CostEstimate,
    /// Percent
    pub expected_yield_increase: u8,
}

fn micro(name: &str, status: NutrientStatus, recommendation: &str) -> Micronutrient {
    Micronutrient {
        name: name.to_string(),
        status,
        recommendation: recommendation.to_string(),
    }
}

fn step(week: u32, fertilizer: &str, quantity: &str, method: &str) -> ScheduledApplication {
    ScheduledApplication {
        week,
        fertilizer: fertilizer.to_string(),
        quantity: quantity.to_string(),
        method: method.to_string(),
    }
}

fn item(item: &str, cost: u32) -> CostItem {
    CostItem {
        item: item.to_string(),
        cost,
    }
}

impl ChemicalRecommendation {
    pub fn sample() -> Self {
        Self {
            npk: NpkLevels {
                nitrogen: NutrientLevel {
                    level: 45,
                    status: NutrientStatus::Deficient,
                },
                phosphorus: NutrientLevel {
                    level: 78,
                    status: NutrientStatus::Adequate,
                },
                potassium: NutrientLevel {
                    level: 62,
                    status: NutrientStatus::Adequate,
                },
            },
            micronutrients: vec![
                micro(
                    "Iron (Fe)",
                    NutrientStatus::Deficient,
                    "Apply iron sulfate 10 kg/acre",
                ),
                micro("Zinc (Zn)", NutrientStatus::Adequate, "Maintain current levels"),
                micro("Boron (B)", NutrientStatus::Deficient, "Apply borax 2 kg/acre"),
                micro(
                    "Manganese (Mn)",
                    NutrientStatus::Adequate,
                    "No additional application needed",
                ),
            ],
            schedule: vec![
                step(1, "DAP (18-46-0)", "50 kg/acre", "Basal application"),
                step(3, "Urea (46-0-0)", "25 kg/acre", "Top dressing"),
                step(6, "NPK (12-32-16)", "30 kg/acre", "Side dressing"),
                step(9, "Potash (0-0-60)", "20 kg/acre", "Foliar spray"),
            ],
            cost: CostEstimate {
                total: 4500,
                breakdown: vec![
                    item("DAP Fertilizer", 1500),
                    item("Urea", 800),
                    item("NPK Complex", 1200),
                    item("Potash", 600),
                    item("Micronutrients", 400),
                ],
            },
            expected_yield_increase: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let rec = ChemicalRecommendation::sample();
        assert_eq!(rec.npk.nitrogen.status, NutrientStatus::Deficient);
        assert_eq!(rec.npk.phosphorus.level, 78);
        let weeks: Vec<_> = rec.schedule.iter().map(|s| s.week).collect();
        assert_eq!(weeks, [1, 3, 6, 9]);
        assert_eq!(rec.cost.total, 4500);
        assert_eq!(rec.expected_yield_increase, 25);
    }
}

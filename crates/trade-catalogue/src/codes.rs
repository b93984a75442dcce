//! Strategic HTS categories.
//!
//! Each category groups four-digit HTS headings that drive a particular kind
//! of import dependency. Heading `8541` appears under both semiconductors and
//! energy, once per role.

use serde::Serialize;

/// A strategic grouping of HTS headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategicCategory {
    pub name: &'static str,
    pub description: &'static str,
    /// Impact level followed by `" - "` and a short rationale.
    pub trade_impact: &'static str,
    pub dependency_level: &'static str,
    /// `(code, description)` pairs in priority order.
    pub codes: &'static [(&'static str, &'static str)],
}

impl StrategicCategory {
    /// Impact level without its rationale, e.g. `"Medium-High"`.
    pub fn impact_level(&self) -> &'static str {
        self.trade_impact
            .split_once(" - ")
            .map_or(self.trade_impact, |(level, _)| level)
    }
}

static CATEGORIES: [StrategicCategory; 8] = [
    StrategicCategory {
        name: "SEMICONDUCTORS & ELECTRONICS",
        description: "Critical for technology sector, concentrated in Asia",
        trade_impact: "High - Major driver of China deficit",
        dependency_level: "Critical",
        codes: &[
            ("8541", "Semiconductors, diodes, transistors, photovoltaic cells"),
            ("8542", "Electronic integrated circuits (microprocessors, memory chips)"),
            ("8471", "Computers and computer equipment"),
            ("8473", "Computer parts and accessories"),
            ("8517", "Telecommunications equipment (phones, networking)"),
            ("8528", "Reception/transmission apparatus for TV, radio"),
            ("9013", "Lasers, optical instruments"),
            ("8534", "Printed circuit boards"),
        ],
    },
    StrategicCategory {
        name: "CRITICAL MINERALS & MATERIALS",
        description: "Essential for clean energy, defense, technology",
        trade_impact: "Medium-High - Strategic vulnerability",
        dependency_level: "Critical",
        codes: &[
            ("2805", "Rare earth metals (lithium, cobalt, etc.)"),
            ("2844", "Radioactive elements (uranium, thorium)"),
            ("7108", "Gold and other precious metals"),
            ("2603", "Copper ores and concentrates"),
            ("2607", "Lead ores and concentrates"),
            ("2608", "Zinc ores and concentrates"),
            ("8107", "Cadmium and articles thereof"),
            ("8109", "Zirconium and articles thereof"),
            ("2825", "Hydrazine, hydroxides (battery materials)"),
        ],
    },
    StrategicCategory {
        name: "PHARMACEUTICALS & MEDICAL",
        description: "Health security and pharmaceutical dependencies",
        trade_impact: "Medium-High - Exposed during COVID-19",
        dependency_level: "High",
        codes: &[
            ("3004", "Pharmaceutical products (medicines)"),
            ("3002", "Human/animal blood, vaccines, toxins"),
            ("3006", "Pharmaceutical goods (first aid, contraceptives)"),
            ("3001", "Glands, organs for therapeutic use"),
            ("9021", "Medical/surgical appliances (pacemakers, hearing aids)"),
            ("9018", "Medical/surgical instruments"),
            ("3822", "Diagnostic reagents"),
            ("2941", "Antibiotics"),
        ],
    },
    StrategicCategory {
        name: "ADVANCED MACHINERY & EQUIPMENT",
        description: "Industrial competitiveness and manufacturing capability",
        trade_impact: "Medium - Manufacturing dependency",
        dependency_level: "Medium-High",
        codes: &[
            ("8456", "Machine tools (laser cutting, 3D printing)"),
            ("8477", "Injection molding machinery"),
            ("8479", "Industrial machinery and robots"),
            ("8486", "Semiconductor manufacturing equipment"),
            ("8543", "Electrical machines and apparatus"),
            ("9031", "Measuring/testing instruments"),
            ("8428", "Lifting/loading machinery"),
            ("8441", "Paper/textile manufacturing machinery"),
        ],
    },
    StrategicCategory {
        name: "ENERGY & BATTERIES",
        description: "Energy transition and storage dependencies",
        trade_impact: "High - Clean energy transition",
        dependency_level: "High",
        codes: &[
            ("8507", "Electric batteries and storage"),
            ("8541", "Photovoltaic cells and solar panels"),
            ("8502", "Electric generators and generating sets"),
            ("8503", "Parts for electric generators"),
            ("2710", "Petroleum oils and fuels"),
            ("8504", "Electrical transformers and converters"),
        ],
    },
    StrategicCategory {
        name: "TEXTILES & APPAREL",
        description: "Consumer goods, labor-intensive manufacturing",
        trade_impact: "High - Large volume, price-sensitive",
        dependency_level: "Medium",
        codes: &[
            ("6109", "T-shirts, singlets, tank tops"),
            ("6203", "Men's suits, jackets, trousers"),
            ("6204", "Women's suits, jackets, dresses"),
            ("6403", "Footwear with rubber/plastic soles"),
            ("6402", "Other footwear"),
            ("6307", "Made-up textile articles"),
            ("5208", "Cotton fabrics"),
            ("6302", "Bed linen, table linen"),
        ],
    },
    StrategicCategory {
        name: "FOOD & AGRICULTURE",
        description: "Food security and seasonal import dependencies",
        trade_impact: "Medium - Seasonal and specialty items",
        dependency_level: "Medium",
        codes: &[
            ("0306", "Shellfish (shrimp, lobster, crab)"),
            ("0303", "Frozen fish"),
            ("0804", "Dates, figs, pineapples, avocados"),
            ("0901", "Coffee and coffee substitutes"),
            ("1701", "Cane/beet sugar"),
            ("2401", "Tobacco and tobacco products"),
            ("0713", "Dried legumes"),
            ("1806", "Chocolate and cocoa preparations"),
        ],
    },
    StrategicCategory {
        name: "TOYS & CONSUMER GOODS",
        description: "Discretionary consumer spending, manufacturing offshoring",
        trade_impact: "Medium - Large volume consumer items",
        dependency_level: "Low-Medium",
        codes: &[
            ("9503", "Toys and sporting goods"),
            ("9401", "Furniture and seating"),
            ("6913", "Statuettes, ornamental ceramics"),
            ("4202", "Luggage, handbags, wallets"),
            ("9504", "Video games and playing cards"),
            ("6601", "Umbrellas and walking sticks"),
            ("9505", "Party supplies and decorations"),
        ],
    },
];

/// All strategic categories in catalogue order.
pub fn strategic_categories() -> &'static [StrategicCategory] {
    &CATEGORIES
}

use crate::models::KnowledgeItem;

fn article(id: &str, category: &str, title: &str, content: &str, tags: &[&str]) -> KnowledgeItem {
    KnowledgeItem {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Offline knowledge base articles, in display order.
pub fn knowledge_articles() -> Vec<KnowledgeItem> {
    vec![
        article(
            "1",
            "Soil Management",
            "How to test soil pH at home",
            "You can test soil pH using a simple home kit or digital pH meter. Mix soil with distilled water in 1:2 ratio, let it settle for 30 minutes, then test the water. pH 6.0-7.0 is ideal for most crops. If pH is too low (acidic), add lime. If too high (alkaline), add sulfur or organic matter.",
            &["soil", "pH", "testing", "acidic", "alkaline"],
        ),
        article(
            "2",
            "Pest Control",
            "Natural pest control methods",
            "Use neem oil spray (2-3 ml per liter water) for soft-bodied pests. Plant marigolds as companion plants to repel harmful insects. Encourage beneficial insects like ladybugs and lacewings. Use sticky traps for flying pests. Soap solution (1 tsp dish soap per liter water) helps control aphids.",
            &["pest", "natural", "neem", "companion planting", "organic"],
        ),
        article(
            "3",
            "Water Management",
            "Signs of overwatering and underwatering",
            "Overwatering signs: Yellow leaves, soft stems, fungal growth, bad smell from soil. Underwatering signs: Wilted leaves, dry soil, stunted growth, leaf drop. Check soil moisture by inserting finger 2 inches deep. Water when top inch is dry but soil below is still slightly moist.",
            &["water", "irrigation", "overwatering", "underwatering", "moisture"],
        ),
        article(
            "4",
            "Plant Diseases",
            "Common fungal diseases and prevention",
            "Powdery mildew: White powdery coating on leaves. Prevent with good air circulation and avoid overhead watering. Blight: Dark spots on leaves/fruits. Remove infected parts immediately. Root rot: Yellowing and wilting. Improve drainage and reduce watering. Always use clean tools and practice crop rotation.",
            &["diseases", "fungal", "mildew", "blight", "rot", "prevention"],
        ),
        article(
            "5",
            "Fertilization",
            "When and how to apply fertilizers",
            "Apply fertilizers early morning or evening to avoid leaf burn. Basal application: During land preparation. Top dressing: During vegetative growth. Foliar spray: During flowering. Always water after fertilizer application. Never apply on wet leaves. Follow the 4R principle: Right source, Right rate, Right time, Right place.",
            &["fertilizer", "application", "timing", "basal", "foliar", "4R"],
        ),
        article(
            "6",
            "Crop Planning",
            "Crop rotation benefits and planning",
            "Rotate crops every season to break pest cycles and improve soil health. Follow legumes with heavy feeders like corn. Don't plant same family crops consecutively. Example rotation: Rice → Wheat → Legumes → Vegetables. This improves nitrogen fixation, reduces pests, and maintains soil fertility naturally.",
            &["rotation", "planning", "legumes", "nitrogen", "soil health"],
        ),
        article(
            "7",
            "Harvesting",
            "How to know when crops are ready to harvest",
            "Fruits: Check color, firmness, and ease of picking. Grains: Test moisture content (should be 12-14%). Leaves: Harvest in early morning when moisture is high. Root vegetables: Check size and gently dig to inspect. Seeds: Wait for pods to dry and rattle. Always harvest in dry weather when possible.",
            &["harvest", "timing", "maturity", "moisture", "quality"],
        ),
        article(
            "8",
            "Weather Protection",
            "Protecting crops from extreme weather",
            "Frost protection: Cover with cloth, use water sprays, or light fires. Heat stress: Provide shade cloth, increase irrigation, mulch heavily. Strong winds: Install windbreaks, stake tall plants. Heavy rain: Ensure good drainage, cover delicate crops. Hail: Use hail nets or temporary structures.",
            &["weather", "frost", "heat", "wind", "rain", "hail", "protection"],
        ),
    ]
}

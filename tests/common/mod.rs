use ecosort::model::*;

#[allow(dead_code)]
pub fn build_test_pool() -> Vec<WasteItem> {
    vec![
        WasteItem::new(
            1,
            LocalizedText::new("Newspaper", "Zeitung"),
            LocalizedText::new("Clean paper is recyclable.", "Sauberes Papier ist recycelbar."),
            BinId::Paper,
        ),
        WasteItem::new(
            2,
            LocalizedText::new("Banana peel", "Bananenschale"),
            LocalizedText::new("Kitchen scraps are compostable.", "Küchenabfälle sind kompostierbar."),
            BinId::Bio,
        ),
        WasteItem::new(
            3,
            LocalizedText::new("Glass bottle", "Glasflasche"),
            LocalizedText::new("Drop it off by color.", "Nach Farbe einwerfen."),
            BinId::Glass,
        ),
        WasteItem::new(
            4,
            LocalizedText::new("Battery", "Batterie"),
            LocalizedText::new("Contains heavy metals.", "Enthält Schwermetalle."),
            BinId::Hazardous,
        ),
        WasteItem::new(
            5,
            LocalizedText::new("Yogurt cup", "Joghurtbecher"),
            LocalizedText::new("Lightweight packaging.", "Leichtverpackung."),
            BinId::Plastic,
        ),
        WasteItem::new(
            6,
            LocalizedText::new("Old chair", "Alter Stuhl"),
            LocalizedText::new("Too big for the bin.", "Zu groß für die Tonne."),
            BinId::Bulky,
        ),
        WasteItem::new(
            7,
            LocalizedText::new("Vacuum bag", "Staubsaugerbeutel"),
            LocalizedText::new("Not recyclable.", "Nicht recycelbar."),
            BinId::Residual,
        ),
    ]
}

#[allow(dead_code)]
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

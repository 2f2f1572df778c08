//! Test fixtures.

/// Sets document in the on-disk format.
pub const SETS_DOCUMENT: &str = r#"[
    {
        "name": "capitals",
        "cards": [
            { "path": "img/france.png", "type": "IMAGE", "key": "Paris" },
            { "path": "img/germany.png", "type": "IMAGE", "key": "Berlin", "hint": "Spree" },
            { "path": "img/spain.png", "type": "IMAGE", "key": "Madrid" }
        ]
    },
    {
        "name": "birds",
        "cards": [
            { "path": "img/heron.png", "type": "IMAGE", "key": "grey heron" },
            { "path": "audio/owl.ogg", "type": "AUDIO", "key": "tawny owl" }
        ]
    }
]"#;

/// Generate a sets document with `num_sets` sets of `cards_per_set` cards.
pub fn sample_document(num_sets: usize, cards_per_set: usize) -> String {
    let sets: Vec<String> = (0..num_sets)
        .map(|s| {
            let cards: Vec<String> = (0..cards_per_set)
                .map(|c| {
                    format!(
                        r#"{{"path": "img/{}-{}.png", "type": "IMAGE", "key": "answer {}"}}"#,
                        s, c, c
                    )
                })
                .collect();
            format!(r#"{{"name": "set {}", "cards": [{}]}}"#, s, cards.join(", "))
        })
        .collect();
    format!("[{}]", sets.join(", "))
}

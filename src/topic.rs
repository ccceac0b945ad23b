//! Keyword gate deciding whether a message is about waste management.

const WASTE_KEYWORDS: &[&str] = &[
    "sampah",
    "limbah",
    "daur ulang",
    "recycle",
    "kompos",
    "organik",
    "anorganik",
    "plastik",
    "kertas",
    "botol",
    "kaleng",
    "kardus",
    "tempat sampah",
    "tong sampah",
    "pengelolaan",
    "pengolahan",
    "pemilahan",
    "reduce",
    "reuse",
    "3r",
    "5r",
    "lingkungan",
    "pencemaran",
    "polusi",
    "tpa",
    "tempat pembuangan",
    "bank sampah",
    "waste",
    "garbage",
    "trash",
    "landfill",
    "biodegradable",
    "non-biodegradable",
    "eco",
    "ramah lingkungan",
    "green",
    "hijau",
    "sustainability",
    "berkelanjutan",
];

/// Returned verbatim when a message matches none of the keywords.
pub const REFUSAL_REPLY: &str = "Halo! 😊 Saya adalah Bot Sampah yang khusus membantu masalah pengelolaan sampah nih! Saya hanya bisa menjawab pertanyaan tentang:\n\n🗂️ Pengelolaan sampah\n♻️ Daur ulang\n🌱 Kompos dan sampah organik\n🏛️ Bank sampah\n🌍 Masalah lingkungan\n\nYuk, tanya sesuatu tentang sampah! Saya siap bantu! 🎉";

/// Case-insensitive substring match against the keyword list.
pub fn is_waste_related(message: &str) -> bool {
    let lower = message.to_lowercase();
    WASTE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

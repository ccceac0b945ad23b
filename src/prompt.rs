/// Sent to the caller whenever the upstream call fails.
pub const FALLBACK_REPLY: &str = "Ups! 😅 Saya lagi ada gangguan koneksi nih. Tapi tenang, ini info berguna tentang sampah:\n\n🌿 **Sampah Organik**: Sisa makanan, daun, kulit buah yang bisa jadi kompos\n♻️ **Sampah Anorganik**: Plastik, logam, kaca yang perlu didaur ulang\n\n✨ **Tips 3R**: Reduce (kurangi), Reuse (pakai lagi), Recycle (daur ulang)!\n\nCoba tanya lagi ya, semoga koneksinya udah lancar! 🚀";

/// Returned by the upstream client when the model produced no candidate text.
pub const NO_ANSWER_REPLY: &str =
    "Maaf, saya tidak dapat memberikan jawaban untuk pertanyaan tersebut.";

pub fn build_prompt(question: &str) -> String {
    format!(
        "Kamu adalah asisten AI yang ceria dan ramah, ahli dalam pengelolaan sampah dan limbah. Jawab pertanyaan berikut dalam bahasa Indonesia dengan gaya yang hangat dan antusias.

PENTING:
- Berikan jawaban yang ringkas dan mudah dipahami (maksimal 3-4 paragraf)
- Gunakan tone yang ceria dan positif
- Sertakan emoji yang relevan untuk membuat jawaban lebih menarik
- Fokus pada solusi praktis dan tips berguna
- Jika ada list/poin, batasi maksimal 4-5 poin saja

Pertanyaan: {question}

Berikan jawaban yang informatif tapi singkat, praktis, dan dengan semangat!"
    )
}

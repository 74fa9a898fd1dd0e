//! # Static Preset Tables
//!
//! Read-only configuration data the transformers draw from: syntax
//! constraint templates, the common vocabulary blacklist, tone modifier
//! presets, and per-phase narrative rules. Goal templates may contain the
//! `{enemy}` placeholder, interpolated when a snapshot is taken.
//!
//! Preset copy is Indonesian-market wording carried verbatim; it is part
//! of the product contract, not localization material.

use crate::voice::{ToneModifiers, ToneScalar};

pub const SYNTAX_CONVERSATIONAL: &[&str] = &[
    "Gunakan kalimat pendek-pendek (maksimal 12 kata per napas).",
    "Gunakan tanda kurung (...) untuk 'internal thought' atau pikiran intrusif.",
    "JANGAN gunakan tanda seru (!) untuk semangat. Gunakan hanya untuk kemarahan/kaget.",
];

pub const SYNTAX_FORMAL: &[&str] = &[
    "Gunakan kalimat lengkap dengan struktur yang jelas.",
    "Hindari penggunaan slang berlebihan.",
    "Gunakan tanda baca yang tepat dan konsisten.",
];

pub const SYNTAX_CASUAL: &[&str] = &[
    "Bebas gunakan kalimat pendek atau fragmen.",
    "Boleh gunakan emoji dan simbol.",
    "Santai tapi tetap terstruktur.",
];

/// Phrases the character must never use, grouped by violation class.
pub const COMMON_VOCABULARY_BLACKLIST: &[&str] = &[
    // Motivator cliche
    "Semangat Pagi",
    "Ayo Kawan",
    "Teman-teman Semua",
    "Jangan Menyerah",
    "Kamu Pasti Bisa",
    // Financial BS
    "Financial Freedom (terlalu jauh)",
    "Passive Income (tanpa konteks)",
    "Mindset Sukses",
    "Rich Mindset",
    "Cuan Melimpah",
    // Corporate speak
    "Solusi Terbaik",
    "Kualitas Terjamin",
    "Nomor Satu",
    "Terpercaya",
    "Best in Class",
    // Preachy language
    "Harus",
    "Wajib (kecuali untuk legal stuff)",
    "Kalian Perlu",
    "Dengarkan Saya",
    // Judging poverty
    "Gara-gara Kopi",
    "Salah Sendiri Boros",
    "Makanya Nabung",
    "Kasian Deh Lu",
];

pub const TONE_REBELLIOUS: ToneModifiers = ToneModifiers {
    sarcasm: ToneScalar::new("High", 8),
    optimism: ToneScalar::new("Low - Masih skeptis", 2),
    paranoia: ToneScalar::new("Medium - Curiga pada sistem", 5),
};

pub const TONE_BALANCED: ToneModifiers = ToneModifiers {
    sarcasm: ToneScalar::new("Medium", 5),
    optimism: ToneScalar::new("Medium", 5),
    paranoia: ToneScalar::new("Low", 3),
};

pub const TONE_HOPEFUL: ToneModifiers = ToneModifiers {
    sarcasm: ToneScalar::new("Low", 2),
    optimism: ToneScalar::new("High", 7),
    paranoia: ToneScalar::new("Very Low", 1),
};

/// Per-phase narrative rules. Goal templates are interpolated with the
/// brief's enemy name when a snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRules {
    pub description: &'static str,
    pub allowed_goals: &'static [&'static str],
    pub forbidden_goals: &'static [&'static str],
    pub tone_profile: ToneModifiers,
}

pub const PHASE_WAKE_UP_CALL: PhaseRules = PhaseRules {
    description: "Karakter baru sadar ada masalah, masih dalam denial/anger stage",
    allowed_goals: &[
        "Mengeluh tentang masalah finansial",
        "Menyadari pola tidak sehat",
        "Marah pada {enemy}",
        "Merasa terjebak dalam siklus",
    ],
    forbidden_goals: &[
        "Memberikan solusi finansial ahli",
        "Mengajarkan cara investasi saham",
        "Menjadi sukses tiba-tiba",
        "Sudah punya semua jawaban",
    ],
    tone_profile: ToneModifiers {
        sarcasm: ToneScalar::new("High", 8),
        optimism: ToneScalar::new("Low - Masih skeptis", 2),
        paranoia: ToneScalar::new("Medium - Curiga pada diskon", 5),
    },
};

pub const PHASE_EXPERIMENTATION: PhaseRules = PhaseRules {
    description: "Karakter mulai coba-coba solusi, masih trial-error",
    allowed_goals: &[
        "Mencoba tips hemat sederhana",
        "Gagal dan belajar dari kesalahan",
        "Mulai tracking pengeluaran",
        "Masih ragu tapi willing to try",
    ],
    forbidden_goals: &[
        "Langsung berhasil sempurna",
        "Jadi financial advisor dadakan",
        "Hilang semua masalah",
    ],
    tone_profile: ToneModifiers {
        sarcasm: ToneScalar::new("Medium", 5),
        optimism: ToneScalar::new("Medium - Mulai ada harapan", 5),
        paranoia: ToneScalar::new("Low - Lebih percaya diri", 3),
    },
};

pub const PHASE_MASTERY: PhaseRules = PhaseRules {
    description: "Karakter sudah punya sistem dan hasil terukur",
    allowed_goals: &[
        "Sharing sistem yang berhasil",
        "Celebrate small wins",
        "Membantu orang lain mulai",
        "Tetap humble tentang journey",
    ],
    forbidden_goals: &[
        "Jadi motivator toxic positivity",
        "Claim semua orang bisa kaya",
        "Lupa struggle awal",
    ],
    tone_profile: ToneModifiers {
        sarcasm: ToneScalar::new("Low", 2),
        optimism: ToneScalar::new("High - Terbukti works", 7),
        paranoia: ToneScalar::new("Very Low - Sudah confident", 1),
    },
};

pub const INTEGRATION_AMBIENT: &str = "Produk hanya boleh disebut sebagai 'alat bantu', \
     bukan pahlawan penyelamat hidup. Jangan hard selling.";
pub const INTEGRATION_MENTION: &str =
    "Produk boleh disebutkan 1x per script sebagai rekomendasi soft.";
pub const INTEGRATION_SHOWCASE: &str =
    "Produk menjadi bagian dari solusi yang ditawarkan (tetap natural).";
pub const INTEGRATION_FEATURE: &str = "Produk adalah fokus utama dengan demonstrasi fitur.";

//! Constants shared across the crate to avoid hardcoding.

/// Model ID constants for the Gemini API.
pub mod models {
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
    pub const GEMINI_2_5_FLASH_LITE: &str = "gemini-2.5-flash-lite";
    pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";

    pub const SUPPORTED_MODELS: &[&str] = &[
        GEMINI_2_5_FLASH,
        GEMINI_2_5_FLASH_LITE,
        GEMINI_2_5_PRO,
    ];
}

/// Defaults for configuration and preference lookup.
pub mod defaults {
    /// Env var holding the API key; `GOOGLE_API_KEY` is checked as fallback.
    pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
    pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";

    /// Project configuration file looked up in the working directory.
    pub const CONFIG_FILE: &str = "rppgen.toml";

    /// Per-user preference storage under the platform config directory.
    pub const PREFS_DIR: &str = "rppgen";
    pub const PREFS_FILE: &str = "preferences.toml";
}

/// User-facing message constants (Indonesian, matching the product voice).
pub mod messages {
    /// The single error message shown for any generation failure.
    pub const GENERATION_FAILED: &str = "Gagal menghasilkan RPP. Silakan coba lagi nanti.";

    pub const SPINNER_WORKING: &str = "AI sedang meracik RPP terbaik untuk Anda...";
    pub const COPY_SUCCESS: &str = "Teks RPP berhasil disalin ke clipboard!";

    pub const APP_TITLE: &str = "Generator RPP Cerdas";
    pub const APP_TAGLINE: &str =
        "Buat Rencana Pelaksanaan Pembelajaran (RPP) lengkap dalam hitungan detik.";
}

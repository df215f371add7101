use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    #[default]
    Indonesian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Indonesian, Language::English];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Indonesian => "id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Indonesian => "Bahasa Indonesia",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}' (expected 'en' or 'id')")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "id" | "indonesian" | "bahasa" => Ok(Language::Indonesian),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

pub const BRAND: &str = "PromptFoundry";

pub fn app_title(_language: Language) -> &'static str {
    BRAND
}

pub fn tagline(language: Language) -> &'static str {
    match language {
        Language::English => {
            "Turn raw ideas into premium prompts in 10 seconds. Ready for Midjourney, DALL-E, and ChatGPT."
        }
        Language::Indonesian => {
            "Ubah ide mentah jadi prompt premium dalam 10 detik. Siap pakai untuk Midjourney, DALL-E, dan ChatGPT."
        }
    }
}

pub fn input_placeholder(language: Language) -> &'static str {
    match language {
        Language::English => "Example: Cyberpunk coffee shop at night...",
        Language::Indonesian => "Contoh: Cyberpunk coffee shop at night...",
    }
}

pub fn submit_button(language: Language) -> &'static str {
    match language {
        Language::English => "Create Prompt",
        Language::Indonesian => "Buat Prompt",
    }
}

pub fn submitting_label(_language: Language) -> &'static str {
    "Generating..."
}

pub fn output_hint(language: Language) -> &'static str {
    match language {
        Language::English => "Output: JSON ready to paste into Midjourney/DALL-E",
        Language::Indonesian => "Hasil: JSON siap copy-paste ke Midjourney/DALL-E",
    }
}

pub fn output_heading(language: Language) -> &'static str {
    match language {
        Language::English => "Ready-to-use Prompt",
        Language::Indonesian => "Prompt Siap Pakai",
    }
}

pub fn copy_button(language: Language) -> &'static str {
    match language {
        Language::English => "Copy JSON",
        Language::Indonesian => "Salin JSON",
    }
}

pub fn pricing_heading(language: Language) -> &'static str {
    match language {
        Language::English => "Need More?",
        Language::Indonesian => "Butuh Lebih Banyak?",
    }
}

pub fn pricing_subheading(language: Language) -> &'static str {
    match language {
        Language::English => "Get 50+ premium templates & exclusive features",
        Language::Indonesian => "Dapatkan 50+ template premium & fitur eksklusif",
    }
}

pub fn popular_badge(language: Language) -> &'static str {
    match language {
        Language::English => "POPULAR",
        Language::Indonesian => "POPULER",
    }
}

pub fn buy_button(language: Language) -> &'static str {
    match language {
        Language::English => "Buy Now",
        Language::Indonesian => "Beli Sekarang",
    }
}

pub fn footer(year: i32) -> String {
    format!("© {year} {BRAND}. All prompts are commercial-use ready.")
}

pub fn language_label(language: Language) -> &'static str {
    match language {
        Language::English => "Language",
        Language::Indonesian => "Bahasa",
    }
}

/// Generic message shown when a failed submission carries no message of its own.
pub fn generation_failed(language: Language) -> &'static str {
    match language {
        Language::English => "Generation failed",
        Language::Indonesian => "Gagal generate",
    }
}

pub fn backend_unavailable(language: Language) -> &'static str {
    match language {
        Language::English => "Background worker is unavailable; restart the app and retry",
        Language::Indonesian => "Proses latar tidak tersedia; buka ulang aplikasi lalu coba lagi",
    }
}

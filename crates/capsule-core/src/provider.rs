#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Openai,
    Grok,
    Gemini,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-4o-mini",
            },
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
            },
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-2.5-flash",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Openai => "OpenAI",
            Provider::Grok => "Grok",
            Provider::Gemini => "Gemini",
        }
    }
}

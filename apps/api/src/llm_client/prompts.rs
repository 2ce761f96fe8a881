// Cross-cutting prompt fragments shared by all generative calls.
// Each service that needs LLM calls defines its own prompts alongside it;
// this file only holds what every prompt must end with.

/// Closing instruction appended to every generation prompt — the provider
/// must answer with a single JSON object and nothing else.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Çok önemli: Yanıtını yalnızca geçerli bir JSON olarak ver, \
JSON dışında hiçbir açıklama, not veya yazı ekleme. \
Yanıt çok uzunsa JSON'u kesmeden tamamla; eksik veya yarım bırakma.";

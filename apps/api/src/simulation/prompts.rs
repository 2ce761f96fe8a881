//! Prompt synthesis for scenario generation.
//!
//! Template constants with `{placeholder}` replacement. Every profile-derived
//! string is run through `sanitize_field` before interpolation so user free
//! text can never terminate or reshape the instruction block.

use crate::analysis::analyzer::ProfileAnalysis;
use crate::analysis::personalization::Difficulty;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::models::profile::Profile;

/// Longest profile fragment interpolated into a prompt.
const MAX_FIELD_LEN: usize = 200;

/// The exact output contract. Field names and nesting must match
/// `models::scenario::GeneratedScenario` — the extractor parses against it.
pub const SCENARIO_SCHEMA: &str = r#"{
  "title": "Simülasyon Başlığı",
  "category": "Teknik | Liderlik | Problem Çözme | Üretim & Kalite",
  "difficulty": "Kolay | Orta | Zor",
  "context": "Şirket, pozisyon, ekip bilgisi, genel ortam",
  "daily_schedule": [
    {
      "time": "09:00",
      "task": "Kod incelemesi",
      "priority": "Yüksek",
      "department": "Backend",
      "team_size": 6,
      "tools": ["GitHub", "Slack"],
      "duration_min": 45
    }
  ],
  "emails": [
    {"from": "pm@company.com", "subject": "Feature Update", "summary": "Müşteri ek özellik istiyor."}
  ],
  "meetings": [
    {"time": "11:00", "participants": ["PM", "Lead Dev"], "topic": "Sprint Planning", "summary": "Görevlerin önceliklendirilmesi."}
  ],
  "situation": "Günün kritik anı ve sorun açıklaması",
  "question": "Hangi strateji izlenmeli?",
  "options": [
    {"id": "a", "text": "Seçenek1", "feedback": "Detaylı analiz", "score": 5},
    {"id": "b", "text": "Seçenek2", "feedback": "Riskli yönleri açıklanmış", "score": 2}
  ]
}"#;

/// Domain inclusion/exclusion rules for every family the system recognizes.
/// Static text — nothing user-controlled is ever spliced into this block.
pub const DOMAIN_RULES: &str = "\
- Eğitim alanı endüstri mühendisliği ile eşleşiyorsa: izin verilen konular \
üretim planlama, kalite kontrol, süreç iyileştirme, tedarik zinciri, vardiya yönetimi; \
yasak konular yazılım geliştirme, kod yazma, backend, frontend, api tasarımı.
- Eğitim alanı bilgisayar veya yazılım mühendisliği ile eşleşiyorsa: izin verilen konular \
kod inceleme, deployment, api tasarımı, mikroservis, sprint planlama; \
yasak konular üretim hattı, fabrika, kalite kontrol, lean üretim.
- Eğitim alanı makine veya elektrik mühendisliği ile eşleşiyorsa: izin verilen konular \
mekanik tasarım, CAD modelleme, prototip testi, bakım planlama; \
yasak konular yazılım mimarisi, kod yazma, web geliştirme.
- Hiçbiri eşleşmiyorsa: kullanıcının mesleğine uygun genel profesyonel görevler üret.";

/// Scenario prompt template.
/// Replace: {title}, {field_of_study}, {experience_level}, {skills},
///          {personalization}, {domain_rules}, {schema}, {json_only}
const SCENARIO_PROMPT_TEMPLATE: &str = r#"Sen bir kariyer simülasyonu üreticisisin. Amacın, kullanıcıya bir iş gününü mümkün olan en gerçekçi şekilde yaşatmaktır.

Kullanıcının mesleği: {title}
Kullanıcının eğitim alanı: {field_of_study}
Kullanıcının deneyim seviyesi: {experience_level}
Kullanıcının becerileri: {skills}

Aşağıdaki kurallara göre detaylı bir JSON senaryosu üret:
1. Günün başlangıcından (08:30) bitişine (18:00) kadar tüm olayları kapsa.
2. En az 6-8 farklı görev yaz ve her birinin kısa açıklamasını, önemini (Kritik, Yüksek, Orta, Düşük), departman ve ekip bilgisini, kullanılan platform ve araçları (ör: Jira, Slack, Zoom, GitHub, Figma, SAP), tahmini süresini (dakika) belirt.
3. Gün içinde gelen ve gönderilmesi gereken e-postaları yaz (konu başlıkları ve içeriği kısa özetle).
4. Gün boyunca yapılan toplantıları belirt (katılımcılar, konular, kararlar).
5. Karar verilmesi gereken 1 ana kritik senaryo seç ve bunun için 3-4 seçenek ver: id (a, b, c, d), text, feedback (artı-eksi yönleriyle detaylı geri bildirim), score (0-5 arası puan).
6. Olayları gerçekçi ve detaylı yaz, iş hayatındaki küçük ayrıntıları da ekle (kahve molası, Slack üzerinden acil mesaj, müşteri talebi değişikliği vb.).

KİŞİSELLEŞTİRME TALİMATLARI:
{personalization}

ALAN KURALLARI (kesinlikle uy):
{domain_rules}

7. Cevabı aşağıdaki JSON formatında ve sadece JSON olarak döndür:
{schema}

{json_only}"#;

/// Removes characters that could break out of the instruction block
/// (backticks, braces), collapses whitespace, and truncates.
pub fn sanitize_field(raw: &str, max_len: usize) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '`'))
        .collect();
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_len)
        .collect()
}

/// Renders the full generation request for one profile + analysis.
pub fn build_scenario_prompt(profile: &Profile, analysis: &ProfileAnalysis) -> String {
    let title = non_empty_or(sanitize_field(profile.title_text(), MAX_FIELD_LEN), "Belirtilmemiş");
    let field = non_empty_or(
        sanitize_field(profile.field_of_study(), MAX_FIELD_LEN),
        "Belirtilmemiş",
    );
    let level = non_empty_or(
        sanitize_field(profile.experience_level.as_deref().unwrap_or(""), 32),
        "Belirtilmemiş",
    );
    let skills = non_empty_or(
        sanitize_field(&profile.skills.join(", "), 400),
        "Belirtilmemiş",
    );

    SCENARIO_PROMPT_TEMPLATE
        .replace("{title}", &title)
        .replace("{field_of_study}", &field)
        .replace("{experience_level}", &level)
        .replace("{skills}", &skills)
        .replace("{personalization}", &personalization_block(analysis))
        .replace("{domain_rules}", DOMAIN_RULES)
        .replace("{schema}", SCENARIO_SCHEMA)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Personalization instructions: difficulty wording, preferred scenario
/// archetypes, and learning focus from the detected gaps.
fn personalization_block(analysis: &ProfileAnalysis) -> String {
    let params = &analysis.personalization_params;

    let difficulty_line = match params.difficulty_preference {
        Difficulty::Easy => {
            "Senaryoyu basit ve anlaşılır tut. Karmaşık teknik detaylardan kaçın."
        }
        Difficulty::Medium => {
            "Orta seviye zorlukta senaryolar oluştur. Teknik ve soft skill dengesini koru."
        }
        Difficulty::Hard | Difficulty::Expert => {
            "Karmaşık, çok katmanlı senaryolar oluştur. Stratejik düşünme gerektiren durumlar ekle."
        }
    };

    let mut lines = vec![format!("- Karmaşıklık seviyesi: {difficulty_line}")];

    let focus: Vec<&str> = params
        .simulation_types
        .iter()
        .take(3)
        .map(String::as_str)
        .collect();
    if !focus.is_empty() {
        lines.push(format!(
            "- Özellikle şu tür senaryolara odaklan: {}",
            focus.join(", ")
        ));
    }

    if !analysis.skill_gaps.is_empty() {
        lines.push(format!(
            "- Şu alanlarda öğrenme fırsatları sun: {}",
            analysis.skill_gaps.join(", ")
        ));
    }

    lines.join("\n")
}

//! Fallback Scenario Bank — hand-authored, schema-complete scenarios returned
//! whenever generation, extraction, or validation fails.
//!
//! The bank performs selection, not generation: dispatch is keyed on the
//! profile's field of study (then title), and every entry is already a valid
//! `GeneratedScenario`. `fallback_scenario` is total — the sparsest profile
//! still gets the generic template.

use crate::analysis::analyzer::{domain_family, DomainFamily, ExperienceLevel};
use crate::models::profile::Profile;
use crate::models::scenario::{
    DecisionOption, GeneratedScenario, ScenarioEmail, ScenarioMeeting, ScheduleEntry,
};

/// Selects the fallback scenario for a profile. Never fails.
pub fn fallback_scenario(profile: &Profile) -> GeneratedScenario {
    let family = match domain_family(profile.field_of_study()) {
        DomainFamily::General => domain_family(profile.title_text()),
        family => family,
    };

    match family {
        DomainFamily::Industrial => industrial_scenario(),
        DomainFamily::Software => software_scenario(),
        // Mechanical/electrical has no dedicated bank entry; the generic
        // template already substitutes the field in.
        _ => generic_scenario(profile),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builders (kept terse — the bank is data, not logic)
// ────────────────────────────────────────────────────────────────────────────

fn entry(
    time: &str,
    task: &str,
    priority: &str,
    department: &str,
    team_size: u32,
    tools: &[&str],
    duration_min: u32,
) -> ScheduleEntry {
    ScheduleEntry {
        time: time.to_string(),
        task: task.to_string(),
        priority: priority.to_string(),
        department: department.to_string(),
        team_size,
        tools: tools.iter().map(|t| t.to_string()).collect(),
        duration_min,
    }
}

fn email(sender: &str, subject: &str, summary: &str) -> ScenarioEmail {
    ScenarioEmail {
        sender: sender.to_string(),
        subject: subject.to_string(),
        summary: summary.to_string(),
    }
}

fn meeting(time: &str, participants: &[&str], topic: &str, summary: &str) -> ScenarioMeeting {
    ScenarioMeeting {
        time: time.to_string(),
        participants: participants.iter().map(|p| p.to_string()).collect(),
        topic: topic.to_string(),
        summary: summary.to_string(),
    }
}

fn option(id: &str, text: &str, feedback: &str, score: u8) -> DecisionOption {
    DecisionOption {
        id: id.to_string(),
        text: text.to_string(),
        feedback: feedback.to_string(),
        score: Some(score),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bank entries
// ────────────────────────────────────────────────────────────────────────────

fn industrial_scenario() -> GeneratedScenario {
    GeneratedScenario {
        title: "Üretim Hattında Kritik Bir Gün".to_string(),
        category: "Üretim & Kalite".to_string(),
        difficulty: "Orta".to_string(),
        context: "Orta ölçekli bir otomotiv yan sanayi fabrikasında endüstri mühendisi olarak \
                  çalışıyorsunuz. 120 kişilik üretim tesisi iki vardiya düzeninde çalışıyor ve \
                  bu hafta büyük bir müşteri sevkiyatı için kapasite zorlanıyor."
            .to_string(),
        daily_schedule: vec![
            entry("08:30", "Vardiya devir raporunun incelenmesi ve günlük üretim hedeflerinin kontrolü",
                "Yüksek", "Üretim Planlama", 4, &["SAP ERP", "Excel"], 30),
            entry("09:15", "Hat 3'teki darboğaz analizi için zaman etüdü",
                "Kritik", "Üretim", 6, &["Kronometre", "Excel", "Minitab"], 60),
            entry("10:30", "Kalite kontrol ekibiyle hatalı parça oranının değerlendirilmesi",
                "Yüksek", "Kalite Güvence", 5, &["Minitab", "SAP ERP"], 45),
            entry("11:30", "Tedarikçiden gelen hammadde gecikmesi için alternatif plan hazırlama",
                "Kritik", "Tedarik Zinciri", 3, &["SAP ERP", "Outlook"], 45),
            entry("13:30", "Kaizen önerilerinin saha turuyla yerinde incelenmesi",
                "Orta", "Üretim", 8, &["A3 Formu"], 60),
            entry("15:00", "Haftalık OEE raporunun hazırlanması",
                "Orta", "Üretim Planlama", 2, &["Excel", "Power BI"], 50),
            entry("16:00", "Kahve molası", "Düşük", "Sosyal", 1, &[], 15),
            entry("16:30", "Yarınki sevkiyat için paketleme hattı kapasite kontrolü",
                "Yüksek", "Lojistik", 4, &["SAP ERP"], 45),
        ],
        emails: vec![
            email("kalite@fabrika.com", "Hat 3 Hata Oranı Artışı",
                "Son 24 saatte hata oranı %2,1'den %4,8'e çıktı; acil kök neden analizi isteniyor."),
            email("satinalma@fabrika.com", "Hammadde Sevkiyat Gecikmesi",
                "Ana tedarikçi çelik sacı iki gün gecikmeli teslim edecek; üretim planının revize edilmesi gerekiyor."),
            email("muduriyet@fabrika.com", "Müşteri Denetimi Hatırlatması",
                "Cuma günü müşteri denetimi var; proses dokümantasyonunun güncel olduğundan emin olun."),
        ],
        meetings: vec![
            meeting("10:00", &["Üretim Müdürü", "Vardiya Amiri", "Kalite Sorumlusu"],
                "Günlük Üretim Toplantısı",
                "Hedef gerçekleşme oranı, hat duruşları ve günün kritik işleri görüşüldü."),
            meeting("14:30", &["Tedarik Zinciri Uzmanı", "Üretim Planlama"],
                "Geciken Hammadde Aksiyon Planı",
                "Alternatif tedarikçi ve üretim sıralaması değişikliği kararlaştırıldı."),
        ],
        situation: "Öğleden sonra Hat 3'teki CNC tezgahı arıza verdi ve bakım ekibi onarımın \
                    en az 6 saat süreceğini bildirdi. Yarın sabah çıkması gereken müşteri \
                    sevkiyatının %30'u bu hattan geçiyor. Kalite ekibi ayrıca son partide \
                    hata oranının yükseldiğini raporladı."
            .to_string(),
        question: "Sevkiyatı kurtarmak için hangi stratejiyi izlersiniz?".to_string(),
        options: vec![
            option("a",
                "Gece vardiyasına fazla mesai planlayıp üretimi Hat 2'ye kaydırmak, kalite kontrol sıklığını artırmak",
                "Dengeli bir yaklaşım: teslimat güvence altına alınırken yükselen hata oranı da kontrol ediliyor. \
                 Fazla mesai maliyeti ve Hat 2'nin kalıp değişim süresi hesaba katılmalı.",
                5),
            option("b",
                "Sevkiyatı iki gün erteleyip müşteriyle yeniden tarih pazarlığı yapmak",
                "Dürüst ama riskli: müşteri denetimi hemen cuma günü ve teslimat güvenilirliği sözleşme kriteri. \
                 Erteleme son çare olmalı.",
                2),
            option("c",
                "Kalite kontrol adımlarını geçici olarak gevşetip mevcut hatlardan maksimum çıktı almak",
                "Kısa vadede adet kurtarır, ancak yükselen hata oranıyla birleşince iade ve itibar riski çok yüksek. \
                 Kalitesiz ürün sevk etmek en pahalı seçenektir.",
                1),
            option("d",
                "Bakım ekibine dış servis desteği alarak onarımı hızlandırmak ve ara stoktan sevkiyatı beslemek",
                "Makul bir alternatif: dış servis maliyeti yüksek olabilir ve ara stok seviyesinin yeterliliği \
                 önce doğrulanmalı. Tek başına yeterli olmayabilir, A seçeneğiyle birleştirilebilir.",
                4),
        ],
    }
}

fn software_scenario() -> GeneratedScenario {
    GeneratedScenario {
        title: "Mikroservis Geçişinde Canlı Ortam Krizi".to_string(),
        category: "Teknik".to_string(),
        difficulty: "Orta".to_string(),
        context: "Hızlı büyüyen bir e-ticaret şirketinde backend geliştirici olarak çalışıyorsunuz. \
                  Ekip, monolitik sipariş sistemini mikroservislere taşıyor ve bu sprint ödeme \
                  servisinin geçişi planlandı."
            .to_string(),
        daily_schedule: vec![
            entry("08:45", "Gece gelen alarmların ve hata loglarının incelenmesi",
                "Yüksek", "Backend", 6, &["Grafana", "Slack"], 30),
            entry("09:30", "Günlük stand-up toplantısı",
                "Orta", "Backend", 8, &["Zoom", "Jira"], 15),
            entry("10:00", "Ödeme servisi için açık pull request'lerin incelenmesi",
                "Yüksek", "Backend", 3, &["GitHub"], 60),
            entry("11:00", "Yeni API uç noktası için entegrasyon testlerinin yazılması",
                "Yüksek", "Backend", 2, &["GitHub", "Postman"], 75),
            entry("13:30", "Sipariş servisi veritabanı göç betiğinin hazırlanması",
                "Kritik", "Backend", 4, &["GitHub", "PostgreSQL"], 90),
            entry("15:15", "Kahve molası", "Düşük", "Sosyal", 1, &[], 15),
            entry("15:30", "Frontend ekibiyle API sözleşmesi uyumsuzluğunun giderilmesi",
                "Orta", "Ürün Geliştirme", 5, &["Slack", "Swagger"], 45),
            entry("16:30", "Sprint görevlerinin güncellenmesi ve yarına hazırlık",
                "Düşük", "Backend", 1, &["Jira"], 30),
        ],
        emails: vec![
            email("pm@sirket.com", "Ödeme Servisi Geçiş Takvimi",
                "Yönetim geçişin bu sprint bitmesini bekliyor; risk görüyorsan bugün bildir."),
            email("devops@sirket.com", "Staging Ortamı Kaynak Limiti",
                "Staging kümesinde bellek limitine takılıyoruz; servis kaynak taleplerini gözden geçirin."),
            email("destek@sirket.com", "Müşteri Bildirimi: Sipariş Durumu Gecikmesi",
                "Bazı müşteriler sipariş durumunun geç güncellendiğini bildiriyor; kuyruk gecikmesi olabilir."),
        ],
        meetings: vec![
            meeting("09:30", &["Scrum Master", "Backend Ekibi"],
                "Daily Stand-up",
                "Geçiş görevlerinin durumu paylaşıldı; ödeme servisi testleri öne alındı."),
            meeting("14:00", &["Tech Lead", "DevOps", "PM"],
                "Go/No-Go Değerlendirmesi",
                "Ödeme servisi canlıya alım kriterleri ve geri dönüş planı netleştirildi."),
        ],
        situation: "Öğleden sonra ödeme servisinin kanarya dağıtımı sırasında hata oranı %0,2'den \
                    %3'e fırladı ve bazı siparişler çifte tahsilat uyarısı üretti. Tech lead \
                    toplantıda; karar size kaldı. Sprint sonuna iki gün var ve yönetim geçişin \
                    tamamlanmasını bekliyor."
            .to_string(),
        question: "İlk hamleniz ne olur?".to_string(),
        options: vec![
            option("a",
                "Kanarya dağıtımını hemen geri almak, çifte tahsilat kayıtlarını tespit edip düzeltme işlemi başlatmak",
                "Doğru öncelik: önce kanama durdurulur, müşteri etkisi telafi edilir. Geçiş gecikir ama ödeme \
                 bütünlüğü tartışılmaz. Kök neden analizi geri alım sonrası sakin kafayla yapılır.",
                5),
            option("b",
                "Hata oranını izlemeye devam edip trafiğin kalanını da yeni servise yönlendirerek sorunu yük altında ayıklamak",
                "Çok riskli: hatalı bir ödeme yolunu büyütmek çifte tahsilatı katlar. Canlı müşteri parasıyla \
                 debug yapılmaz.",
                0),
            option("c",
                "Trafiği eski monolite döndürmeden log toplayıp bir saat içinde hotfix denemek",
                "Orta risk: kısa bir gözlem penceresi savunulabilir, ancak çifte tahsilat şüphesi varken her \
                 dakika maliyetli. Geri alma çok daha ucuz bir sigorta.",
                2),
            option("d",
                "Sorunu PM'e eskale edip sprint hedefinin revize edilmesini istemek, teknik kararı toplantı sonrasına bırakmak",
                "Eskalasyon gerekli ama yeterli değil: üretimde aktif bir para hatası varken teknik aksiyonu \
                 beklemeye almak savunulamaz. Önce geri al, sonra eskale et.",
                1),
        ],
    }
}

/// Generic cross-domain template with light substitution of the field of
/// study, institution, and a seniority word into fixed slots.
fn generic_scenario(profile: &Profile) -> GeneratedScenario {
    let field = profile.field_of_study().trim();
    let field_display = if field.is_empty() {
        "Profesyonel".to_string()
    } else {
        field.to_string()
    };
    let university = profile
        .university
        .as_deref()
        .unwrap_or("alanında tanınan bir kurum");
    let seniority = match ExperienceLevel::parse(profile.experience_level.as_deref()) {
        ExperienceLevel::Junior => "yeni başlayan",
        ExperienceLevel::Mid => "deneyimli",
        ExperienceLevel::Senior => "kıdemli",
        ExperienceLevel::Lead => "ekip lideri konumunda",
        ExperienceLevel::Unknown => "deneyimli",
    };

    GeneratedScenario {
        title: format!("{field_display} Alanında Yoğun Bir İş Günü"),
        category: "Problem Çözme".to_string(),
        difficulty: "Orta".to_string(),
        context: format!(
            "{university} mezunu, {seniority} bir profesyonel olarak orta ölçekli bir şirkette \
             çalışıyorsunuz. Bugün hem rutin işleriniz hem de beklenmedik bir müşteri talebi \
             gündeminizde."
        ),
        daily_schedule: vec![
            entry("08:30", "Günün planının gözden geçirilmesi ve e-posta kontrolü",
                "Orta", "Genel", 1, &["Outlook"], 30),
            entry("09:00", "Ekip içi haftalık koordinasyon toplantısı",
                "Yüksek", "Genel", 6, &["Zoom"], 45),
            entry("10:00", "Devam eden projenin ilerleme raporunun hazırlanması",
                "Yüksek", "Proje Ofisi", 2, &["Excel", "PowerPoint"], 75),
            entry("11:30", "Müşteriden gelen acil talebin kapsamının netleştirilmesi",
                "Kritik", "Müşteri İlişkileri", 3, &["Outlook", "Telefon"], 45),
            entry("13:30", "Talep için çözüm alternatiflerinin çalışılması",
                "Kritik", "Genel", 2, &["Excel"], 90),
            entry("15:00", "Kahve molası", "Düşük", "Sosyal", 1, &[], 15),
            entry("15:15", "Yöneticiyle çözüm önerisinin ön değerlendirmesi",
                "Yüksek", "Genel", 2, &["Zoom"], 30),
            entry("16:00", "Günün işlerinin kapanışı ve yarının planlanması",
                "Orta", "Genel", 1, &["Outlook"], 45),
        ],
        emails: vec![
            email("musteri@firma.com", "Acil: Teslim Kapsamı Değişikliği",
                "Müşteri mevcut teslimatın kapsamını genişletmek istiyor; süre aynı kalsın diyor."),
            email("yonetici@sirket.com", "Çeyrek Sonu Hedefleri",
                "Çeyrek kapanışına iki hafta kaldı; önceliklerinizi buna göre düzenleyin."),
        ],
        meetings: vec![
            meeting("09:00", &["Ekip Lideri", "Proje Ekibi"],
                "Haftalık Koordinasyon",
                "Devam eden işler ve bu haftanın öncelikleri netleştirildi."),
            meeting("15:15", &["Yönetici"],
                "Müşteri Talebi Ön Değerlendirme",
                "Kapsam değişikliğinin süre ve kaynak etkisi tartışıldı."),
        ],
        situation: "Müşteri, teslim tarihini değiştirmeden kapsamı genişletmek istiyor. Mevcut \
                    planla iki iş aynı anda yetişmiyor; yöneticiniz kararı sizin önerinize göre \
                    verecek."
            .to_string(),
        question: "Yöneticinize hangi öneriyle gidersiniz?".to_string(),
        options: vec![
            option("a",
                "Kapsam artışının süre ve kaynak etkisini sayısallaştırıp müşteriye iki alternatifli bir plan sunmak",
                "En sağlıklı yol: veriyle konuşmak beklenti yönetimini kolaylaştırır ve kararı müşterinin \
                 kendi önceliğine bırakır.",
                5),
            option("b",
                "Mevcut ekiple fazla mesai yaparak her iki işi de aynı tarihte bitirmeye söz vermek",
                "Kısa vadede kahramanlık gibi görünür; tükenmişlik ve kalite riski yüksek, gecikme ihtimali \
                 müşteriyle ilişkiyi daha çok yıpratır.",
                1),
            option("c",
                "Talebi reddedip sözleşmedeki kapsamı hatırlatmak",
                "Sözleşme haklı olabilir ama katı bir ret, uzun vadeli ilişkide gereksiz hasar bırakır. \
                 Önce alternatif sunulmalı.",
                2),
            option("d",
                "Düşük öncelikli rutin işleri ertelemeyi önerip serbest kalan kapasiteyi müşteri talebine ayırmak",
                "Uygulanabilir bir ara çözüm: önceliklendirme şeffaf yapılırsa iyi çalışır; ertelenen işlerin \
                 sahipleriyle mutabakat şart.",
                4),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(degree: &str, title: &str, level: &str) -> Profile {
        Profile {
            degree: (!degree.is_empty()).then(|| degree.to_string()),
            current_title: (!title.is_empty()).then(|| title.to_string()),
            experience_level: (!level.is_empty()).then(|| level.to_string()),
            ..Profile::default()
        }
    }

    #[test]
    fn test_industrial_field_gets_production_scenario() {
        let scenario = fallback_scenario(&profile("Endüstri Mühendisliği", "", "junior"));
        assert_eq!(scenario.category, "Üretim & Kalite");
    }

    #[test]
    fn test_software_field_gets_backend_scenario() {
        let scenario = fallback_scenario(&profile("Bilgisayar Mühendisliği", "", ""));
        assert_eq!(scenario.category, "Teknik");
        assert!(scenario.title.contains("Mikroservis"));
    }

    #[test]
    fn test_title_used_when_field_is_generic() {
        let scenario = fallback_scenario(&profile("", "Yazılım Geliştirici", ""));
        assert_eq!(scenario.category, "Teknik");
    }

    #[test]
    fn test_unmatched_profile_gets_generic_template() {
        let scenario = fallback_scenario(&profile("İşletme", "Muhasebeci", "mid"));
        assert_eq!(scenario.category, "Problem Çözme");
        assert!(scenario.title.contains("İşletme"));
    }

    #[test]
    fn test_generic_template_substitutes_university_and_seniority() {
        let mut p = profile("İşletme", "", "senior");
        p.university = Some("Boğaziçi Üniversitesi".to_string());
        let scenario = fallback_scenario(&p);
        assert!(scenario.context.contains("Boğaziçi Üniversitesi"));
        assert!(scenario.context.contains("kıdemli"));
    }

    #[test]
    fn test_empty_profile_is_still_schema_complete() {
        let scenario = fallback_scenario(&Profile::default());
        assert!(scenario.is_schema_complete());
        assert!(!scenario.daily_schedule.is_empty());
        assert!(!scenario.title.is_empty());
    }

    #[test]
    fn test_every_bank_entry_is_schema_complete() {
        for scenario in [
            industrial_scenario(),
            software_scenario(),
            generic_scenario(&Profile::default()),
        ] {
            assert!(scenario.is_schema_complete());
            assert!(scenario.options.len() >= 3);
            assert!(scenario.daily_schedule.len() >= 6);
            assert!(!scenario.emails.is_empty());
            assert!(!scenario.meetings.is_empty());
            assert!(!scenario.situation.is_empty());
            assert!(!scenario.question.is_empty());
        }
    }

    #[test]
    fn test_bank_entries_survive_wire_round_trip() {
        // Bank entries must satisfy the same strict schema the provider must.
        let json = serde_json::to_string(&industrial_scenario()).unwrap();
        let recovered: GeneratedScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, industrial_scenario());
    }

    #[test]
    fn test_mechanical_field_falls_back_to_generic() {
        let scenario = fallback_scenario(&profile("Makine Mühendisliği", "", ""));
        assert_eq!(scenario.category, "Problem Çözme");
        assert!(scenario.title.contains("Makine Mühendisliği"));
    }
}

//! Static landing content. Everything here is `'static` and read-only; the
//! sections receive it through props.

use crate::icons::{self, HeroIcon};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavItem {
    /// Section id the anchor points at (`"#services"` -> `"services"`).
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "#home", label: "Home" },
    NavItem { href: "#services", label: "Layanan" },
    NavItem { href: "#portfolio", label: "Portfolio" },
    NavItem { href: "#pricing", label: "Harga" },
    NavItem { href: "#contact", label: "Kontak" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: HeroIcon,
}

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        title: "Pembuatan Aplikasi Multiplatform",
        description: "Kami buatkan aplikasi untuk tugas akhir Anda dengan teknologi terkini yang bisa berjalan di berbagai platform (Android, iOS, Web).",
        icon: HeroIcon::CodeBracket,
    },
    ServiceItem {
        title: "Bimbingan Step-by-Step",
        description: "Kami jelaskan alur pembuatan aplikasi Anda secara detail, sehingga Anda bisa mempresentasikan dengan percaya diri di depan dosen.",
        icon: HeroIcon::AcademicCap,
    },
    ServiceItem {
        title: "Dokumentasi Lengkap",
        description: "Kami sediakan dokumentasi lengkap termasuk laporan, diagram UML, dan panduan penggunaan untuk memudahkan Anda.",
        icon: HeroIcon::DocumentText,
    },
    ServiceItem {
        title: "Backend & API Development",
        description: "Kami bangun sistem backend yang scalable dengan teknologi modern seperti Node.js, Laravel, atau Firebase.",
        icon: HeroIcon::Server,
    },
    ServiceItem {
        title: "UI/UX Modern",
        description: "Desain antarmuka yang user-friendly dan modern untuk meningkatkan nilai plus aplikasi Anda.",
        icon: HeroIcon::DevicePhoneMobile,
    },
    ServiceItem {
        title: "Support 24/7",
        description: "Tim support kami siap membantu Anda kapan saja, termasuk revisi mendadak sebelum sidang.",
        icon: HeroIcon::ChatBubbleLeftRight,
    },
];

/// How a technology logo is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TechIcon {
    /// Brand glyph from the simple-icons CDN, tinted with `hex`.
    Vector { slug: &'static str, hex: &'static str },
    /// Prebuilt image (badge or svg file).
    Local(&'static str),
    /// Monogram fallback.
    Initials(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechItem {
    pub name: &'static str,
    pub icon: TechIcon,
}

const fn vector(name: &'static str, slug: &'static str, hex: &'static str) -> TechItem {
    TechItem { name, icon: TechIcon::Vector { slug, hex } }
}

pub const TECHNOLOGIES: &[TechItem] = &[
    vector("JavaScript", "javascript", "F7DF1E"),
    vector("Node.js", "nodedotjs", "5FA04E"),
    vector("MongoDB", "mongodb", "47A248"),
    vector("MySQL", "mysql", "4479A1"),
    vector("Express", "express", "000000"),
    vector("Firebase", "firebase", "DD2C00"),
    TechItem { name: "C#", icon: TechIcon::Initials("C#") },
    vector("React", "react", "61DAFB"),
    vector("EJS", "ejs", "B4CA65"),
    vector("TypeScript", "typescript", "3178C6"),
    vector("PostgreSQL", "postgresql", "4169E1"),
    vector("Bootstrap", "bootstrap", "7952B3"),
    vector("Bulma", "bulma", "00D1B2"),
    vector("TailwindCSS", "tailwindcss", "06B6D4"),
    vector("Vite", "vite", "646CFF"),
    TechItem {
        name: "Flowbite",
        icon: TechIcon::Local("https://img.shields.io/badge/Flowbite-%2303C8A8.svg?style=for-the-badge&logo=flowbite&logoColor=white"),
    },
    vector("daisyUI", "daisyui", "5A0EF8"),
    vector("Next.js", "nextdotjs", "000000"),
    vector("Material UI (MUI)", "mui", "007FFF"),
    vector("Prisma", "prisma", "2D3748"),
    vector("Supabase", "supabase", "3FCF8E"),
    vector("Zod", "zod", "3E67B1"),
    vector("Redis", "redis", "FF4438"),
    vector("Auth0", "auth0", "EB5424"),
    vector("JWT", "jsonwebtokens", "000000"),
    vector("Sequelize", "sequelize", "52B0E7"),
    vector("SQLite", "sqlite", "003B57"),
    vector("Handlebars.js", "handlebarsdotjs", "000000"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub href: Option<&'static str>,
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Sistem Pendukung Keputusan Pemberian Beasiswa Rote Ndao menggunakan Algoritma SAW & TOPSIS",
        description: "Aplikasi berbasis web yang membantu menentukan penerima beasiswa di Kabupaten Rote Ndao menggunakan algoritma SAW dan TOPSIS. Sistem ini memudahkan proses seleksi agar lebih transparan dan objektif.",
        image: Some("/assets/projects/beasiswa-spk-rote-ndao.png"),
        tags: &["Next.JS", "React", "Supabase", "PostgreSQL", "ShadcnUI"],
        href: None,
    },
    PortfolioItem {
        title: "Sistem Informasi Surat Menyurat Kelurahan Liliba Kupang",
        description: "Sistem informasi digital untuk mengelola surat masuk, surat keluar, dan surat keterangan warga di Kelurahan Liliba Kupang. Aplikasi ini mempermudah pembuatan, pencatatan, serta pelacakan surat secara cepat dan akurat.",
        image: Some("/assets/projects/sisurat.png"),
        tags: &["Next.JS", "React", "Supabase", "PostgreSQL", "HeroUI"],
        href: None,
    },
    PortfolioItem {
        title: "Tes Psikologi Web",
        description: "Platform berbasis web untuk melakukan tes psikologi online. Sistem ini menyediakan soal-soal psikotes, otomatisasi penilaian, dan hasil analisis yang dapat digunakan untuk rekrutmen maupun asesmen individu.",
        image: Some("/assets/projects/psikologi-tes.png"),
        tags: &["React", "Node.js", "MongoDB", "Flowbite CSS"],
        href: None,
    },
    PortfolioItem {
        title: "E-Learning Yayasan Obor Timor Ministry",
        description: "Platform e-learning untuk Yayasan Obor Timor Ministry yang menyediakan materi pembelajaran berbentuk video, kuis interaktif, dan sertifikat online. Mendukung proses belajar mengajar jarak jauh secara efektif.",
        image: Some("/assets/projects/e-learning-yotm.png"),
        tags: &["Next.JS", "React", "Node.js", "PostgreSQL", "Firebase", "ShadcnUI"],
        href: None,
    },
    PortfolioItem {
        title: "Sistem Pendukung Keputusan Rumah Layak Huni Rote Ndao menggunakan algoritma SAW & TOPSIS",
        description: "Aplikasi yang digunakan pemerintah Kabupaten Rote Ndao untuk menentukan calon penerima program rumah layak huni. Sistem ini menggunakan metode analisis kriteria agar distribusi bantuan lebih tepat sasaran.",
        image: Some("/assets/projects/layak-huni-spk.png"),
        tags: &["React", "Node.js", "MongoDB", "Flowbite"],
        href: None,
    },
    PortfolioItem {
        title: "Sistem Pendukung Keputusan Pembebasan Bersyarat Lapas Kelas IIA Kupang menggunakan algoritma TOPSIS",
        description: "Sistem pendukung keputusan yang membantu pihak Lapas Kelas IIA Kupang dalam menilai kelayakan narapidana untuk mendapatkan pembebasan bersyarat berdasarkan kriteria hukum, perilaku, dan administratif.",
        image: Some("/assets/projects/spk-lp-iia.png"),
        tags: &["Bulma CSS", "Node.js", "EJS", "MySQL"],
        href: None,
    },
    PortfolioItem {
        title: "Sistem Informasi Monitoring Siswa SMA Negeri 3 Kupang",
        description: "Aplikasi monitoring siswa yang digunakan guru dan wali kelas untuk memantau kehadiran, nilai, dan pelanggaran siswa di SMA Negeri 3 Kupang. Sistem ini juga menyediakan laporan perkembangan siswa secara real-time.",
        image: Some("/assets/projects/simon.png"),
        tags: &["React", "Node.js", "MongoDB"],
        href: None,
    },
    PortfolioItem {
        title: "NatureCare Eco App",
        description: "Aplikasi yang membantu pengguna untuk menemukan pengepul dan menjual barang bekas secara online. Aplikasi ini juga menyediakan informasi tentang cara mendaur ulang sampah dengan benar.",
        image: Some("/assets/projects/naturecare.png"),
        tags: &["React", "Node.js", "MongoDB", "Tailwind CSS"],
        href: None,
    },
];

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

impl PortfolioItem {
    pub fn image_or_placeholder(&self) -> &'static str {
        self.image.filter(|src| !src.trim().is_empty()).unwrap_or(PLACEHOLDER_IMAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub not_included: &'static [&'static str],
    pub popular: bool,
    pub cta: Option<CallToAction>,
}

pub const DEFAULT_CTA_LABEL: &str = "Pilih Paket Ini";

impl PricingPlan {
    pub fn cta_label(&self) -> &'static str {
        self.cta.map(|cta| cta.label).unwrap_or(DEFAULT_CTA_LABEL)
    }

    /// External link for the plan button, when the plan has one. Plans
    /// without a link open the contact picker instead.
    pub fn cta_href(&self) -> Option<&'static str> {
        self.cta.and_then(|cta| cta.href)
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Paket Basic",
        price: "Mulai Rp 1,7 jt (± Rp 300rb)",
        description: "Untuk aplikasi sederhana 1 platform. Harga bisa turun ~300rb atau naik tergantung kompleksitas & scope.",
        features: &[
            "1 platform (Android ATAU iOS ATAU Web)",
            "Hingga 3 fitur inti (fitur tambahan dihitung terpisah)",
            "Dokumentasi dasar",
            "1x revisi tambah fitur (fitur kecil; biaya mengikuti scope)",
        ],
        not_included: &[
            "Backend custom/kompleks",
            "Integrasi pihak ketiga non-standar (payment, chat realtime, dsb)",
            "Deploy ke store/hosting (opsional add-on)",
        ],
        popular: false,
        cta: None,
    },
    PricingPlan {
        name: "Paket Standard",
        price: "Mulai Rp 3,0 jt (± Rp 500rb)",
        description: "Solusi lengkap untuk mayoritas tugas akhir: 2 platform + backend dasar, batas fitur jelas, dan pendampingan.",
        features: &[
            "2 platform (Android+iOS ATAU Web+Mobile)",
            "Hingga 6 fitur inti",
            "Backend dasar (CRUD + auth sederhana)",
            "Dokumentasi lengkap",
            "3x revisi minor + 1x revisi tambah fitur",
            "Bimbingan 2 sesi",
            "Bantuan deploy ke 1 store/hosting",
        ],
        not_included: &[
            "Fitur kompleks (payment gateway, chat realtime, push notifikasi massal) kecuali disepakati",
            "Integrasi pihak ketiga di luar list standar",
        ],
        popular: true,
        cta: None,
    },
    PricingPlan {
        name: "Paket Premium",
        price: "Mulai Rp 5,5 jt (± Rp 1 jt)",
        description: "Untuk aplikasi kompleks multi-platform dengan backend custom, prioritas pengerjaan, dan dukungan lengkap.",
        features: &[
            "3 platform (Android, iOS, Web)",
            "Hingga 12 fitur inti awal (penambahan lewat sprint disepakati terpisah)",
            "Backend custom (role/relasi kompleks, laporan)",
            "Dokumentasi super lengkap",
            "5x revisi minor + 2x revisi tambah fitur",
            "Bimbingan 5 sesi",
            "Prioritas pengerjaan",
            "QA & optimasi dasar",
            "Deploy ke 2 store + 1 hosting",
            "Monitoring & analytics basic",
        ],
        not_included: &[
            "Pengembangan berkelanjutan tanpa batas (diatur per sprint/kontrak lanjutan)",
            "Biaya store/hosting/akun publisher",
        ],
        popular: false,
        cta: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub role: Option<&'static str>,
    pub company: Option<&'static str>,
    pub avatar: Option<&'static str>,
}

pub const MAX_RATING: u8 = 5;

impl Testimonial {
    const fn new(name: &'static str, rating: u8, text: &'static str) -> Self {
        Testimonial { name, rating, text, role: None, company: None, avatar: None }
    }

    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }

    /// "role · company", whichever parts are present.
    pub fn byline(&self) -> Option<String> {
        match (self.role, self.company) {
            (Some(role), Some(company)) => Some(format!("{role} · {company}")),
            (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
            (None, None) => None,
        }
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial::new("Ariel", 5, "Lumayan, saya akhirnya eskom"),
    Testimonial::new("Ina", 5, "semua revisi dan tambah fitur dikerjakan sesuai request kwkwk"),
    Testimonial::new("Ratna", 5, "msih dlm pengerjaan tapi progress dan tambah fitur okee."),
    Testimonial::new("Inthan", 5, "aplikasi saya utk studi smua dikerjakan dengan baik dan perbaikan bug cepat"),
    Testimonial::new("Richard", 5, "Pengerjaan cepat, hasil sesuai ekspektasi, dan komunikasinya sangat jelas."),
    Testimonial::new("Erik", 4, "Beberapa revisi memang perlu, tapi overall aplikasinya sudah bagus banget."),
    Testimonial::new("Yohan", 5, "Mantap sekali, fitur-fitur yang saya minta semua bisa berjalan lancar."),
    Testimonial::new("Clara", 5, "Desain aplikasi sangat rapi, modern, dan mudah digunakan."),
    Testimonial::new("Riko", 4, "Awalnya ada bug kecil, tapi cepat banget di-fix. Jadi puas dengan hasil akhirnya."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Github,
    Linkedin,
    X,
    Instagram,
    Facebook,
    Dribbble,
    Behance,
    Youtube,
    Website,
    Portfolio,
}

pub enum SocialGlyph {
    Filled(&'static str),
    Outline(HeroIcon),
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::Github => "Github",
            SocialPlatform::Linkedin => "Linkedin",
            SocialPlatform::X => "X (Twitter)",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Dribbble => "Dribbble",
            SocialPlatform::Behance => "Behance",
            SocialPlatform::Youtube => "Youtube",
            SocialPlatform::Website => "Website",
            SocialPlatform::Portfolio => "Portfolio",
        }
    }

    pub fn glyph(self) -> SocialGlyph {
        match self {
            SocialPlatform::Github => SocialGlyph::Filled(icons::GITHUB_PATH),
            SocialPlatform::Linkedin => SocialGlyph::Filled(icons::LINKEDIN_PATH),
            SocialPlatform::X => SocialGlyph::Filled(icons::X_PATH),
            SocialPlatform::Instagram => SocialGlyph::Filled(icons::INSTAGRAM_PATH),
            SocialPlatform::Facebook => SocialGlyph::Filled(icons::FACEBOOK_PATH),
            SocialPlatform::Dribbble => SocialGlyph::Filled(icons::DRIBBBLE_PATH),
            SocialPlatform::Behance => SocialGlyph::Filled(icons::BEHANCE_PATH),
            SocialPlatform::Youtube => SocialGlyph::Filled(icons::YOUTUBE_PATH),
            SocialPlatform::Website | SocialPlatform::Portfolio => {
                SocialGlyph::Outline(HeroIcon::GlobeAlt)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub image: Option<&'static str>,
    pub socials: &'static [(SocialPlatform, &'static str)],
}

impl TeamMember {
    /// Social links worth rendering: non-blank and not a `<handle>` placeholder.
    pub fn visible_socials(&self) -> impl Iterator<Item = (SocialPlatform, &'static str)> + '_ {
        self.socials
            .iter()
            .copied()
            .filter(|(_, url)| !url.trim().is_empty() && !url.contains('<'))
    }

    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

/// First letter of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Arpakhsad Joshtri Sugiatma Lenggu",
        role: "Fullstack Developer",
        description: "Lulusan Ilmu Komputer dengan pengalaman 5 tahun mengembangkan aplikasi multiplatform.",
        skills: &["Next.JS", "React", "Typescript", "Node.js", "HeroUI", "TailwindCSS", "Prisma"],
        image: Some("https://avatars.githubusercontent.com/u/89520714?v=4"),
        socials: &[
            (SocialPlatform::Github, "https://github.com/Joshtri"),
            (
                SocialPlatform::Linkedin,
                "https://www.linkedin.com/in/arpakhsad-joshtri-sugiatma-lenggu-771242201/",
            ),
            (SocialPlatform::Portfolio, "https://arpakhsad-lenggu-portofolio.vercel.app/"),
            (SocialPlatform::X, "https://x.com/<your-handle>"),
            (SocialPlatform::Instagram, "https://www.instagram.com/joshtrilenggu/"),
        ],
    },
    TeamMember {
        name: "Samuel Jacob",
        role: "Frontend Developer",
        description: "Spesialis antarmuka pengguna dengan keahlian dalam membuat desain yang intuitif dan sistem backend yang scalable.",
        skills: &["React", "TailwindCSS", "DaisyUI", "Node.js"],
        image: Some("https://avatars.githubusercontent.com/u/172507739?v=4"),
        socials: &[
            (SocialPlatform::Github, "https://github.com/Anthasss"),
            (SocialPlatform::Instagram, "https://www.instagram.com/samuelbjacob_/"),
            (SocialPlatform::Linkedin, "https://www.linkedin.com/in/<samuel-handle>/"),
            (SocialPlatform::Website, "https://samuel.example.com"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_plan_lists_features() {
        for plan in PRICING_PLANS {
            assert!(!plan.features.is_empty(), "{} has no features", plan.name);
        }
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Paket Standard");
    }

    #[test]
    fn plans_without_cta_use_default_label_and_no_link() {
        let plan = PRICING_PLANS[0];
        assert_eq!(plan.cta_label(), "Pilih Paket Ini");
        assert_eq!(plan.cta_href(), None);
    }

    #[test]
    fn every_portfolio_item_has_tags() {
        for item in PORTFOLIO {
            assert!(!item.tags.is_empty(), "{} has no tags", item.title);
        }
    }

    #[test]
    fn missing_portfolio_image_falls_back_to_placeholder() {
        let item = PortfolioItem { image: None, ..PORTFOLIO[0] };
        assert_eq!(item.image_or_placeholder(), PLACEHOLDER_IMAGE);

        let blank = PortfolioItem { image: Some("  "), ..PORTFOLIO[0] };
        assert_eq!(blank.image_or_placeholder(), PLACEHOLDER_IMAGE);

        assert_eq!(PORTFOLIO[1].image_or_placeholder(), "/assets/projects/sisurat.png");
    }

    #[test]
    fn technology_names_are_unique() {
        let mut seen = HashSet::new();
        for tech in TECHNOLOGIES {
            assert!(seen.insert(tech.name), "duplicate technology {}", tech.name);
        }
        assert_eq!(TECHNOLOGIES.len(), 28);
    }

    #[test]
    fn testimonial_ratings_stay_within_five() {
        for t in TESTIMONIALS {
            assert!(t.rating <= MAX_RATING);
        }
        let loud = Testimonial::new("x", 9, "y");
        assert_eq!(loud.stars(), 5);
    }

    #[test]
    fn byline_joins_present_parts() {
        let mut t = Testimonial::new("Ana", 5, "ok");
        assert_eq!(t.byline(), None);
        t.role = Some("Mahasiswa");
        assert_eq!(t.byline().as_deref(), Some("Mahasiswa"));
        t.company = Some("Undana");
        assert_eq!(t.byline().as_deref(), Some("Mahasiswa · Undana"));
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Arpakhsad Joshtri Sugiatma Lenggu"), "AJ");
        assert_eq!(initials("samuel"), "S");
        assert_eq!(initials("  "), "");
        assert_eq!(TEAM[1].initials(), "SJ");
    }

    #[test]
    fn placeholder_social_links_are_hidden() {
        let shown: Vec<_> = TEAM[0].visible_socials().map(|(p, _)| p).collect();
        assert_eq!(
            shown,
            vec![SocialPlatform::Github, SocialPlatform::Linkedin, SocialPlatform::Portfolio, SocialPlatform::Instagram]
        );
    }

    #[test]
    fn nav_items_point_at_sections() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(NavItem::section_id).collect();
        assert_eq!(ids, vec!["home", "services", "portfolio", "pricing", "contact"]);
    }
}

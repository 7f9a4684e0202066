
#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    SITE.url
}

// Dev builds never ask to be indexed.
#[cfg(debug_assertions)]
pub fn allow_indexing() -> bool {
    false
}

#[cfg(not(debug_assertions))]
pub fn allow_indexing() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub og_image: &'static str,
    pub keywords: &'static [&'static str],
    pub creator: &'static str,
    pub twitter_handle: &'static str,
    pub theme_color: &'static str,
    pub locale: &'static str,
    pub site_type: &'static str,
    pub favicon: &'static str,
    pub google_verification: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    name: "Ngodingin Assist",
    description: "Jasa pembuatan aplikasi web untuk tugas akhir mahasiswa. Konsultasi gratis untuk skripsi, thesis, dan project akhir dengan teknologi modern.",
    url: "https://www.ngodingin-assist.tech",
    og_image: "https://www.ngodingin-assist.tech/og-image.png",
    keywords: &[
        "jasa skripsi",
        "tugas akhir",
        "aplikasi web",
        "konsultasi IT",
        "web development",
        "sistem informasi",
        "project mahasiswa",
        "ngodingin",
        "bantuan coding",
        "pembuatan website",
        "harga ngodingin",
        "biaya jasa skripsi",
        "tim ngodingin",
        "produk ngodingin",
        "layanan ngodingin",
        "portofolio ngodingin",
        "kontak ngodingin",
        "teknologi ngodingin",
        "testimoni ngodingin",
        "paket harga tugas akhir",
        "developer ngodingin",
        "programmer indonesia",
        "jasa coding murah",
        "bantuan tugas akhir",
    ],
    creator: "Ngodingin Team",
    twitter_handle: "@ngodingin_assist",
    theme_color: "#000000",
    locale: "id_ID",
    site_type: "website",
    favicon: "/favicon-32x32.png",
    google_verification: "CntfLqCuMdQqCCcb7C2pm9V0yFZWrofEphRiXRjzMok",
};

/// Business contact details shared by the schema.org blocks, the contact
/// section and the floating WhatsApp button.
pub struct BusinessContact {
    pub whatsapp: &'static str,
    pub phone_display: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
    pub location: &'static str,
}

pub const CONTACT: BusinessContact = BusinessContact {
    whatsapp: "0852-9838-9192",
    phone_display: "+62-852-9838-9192",
    email: "ngodingin@protonmail.com",
    instagram: "ngodingin-assist",
    location: "Kupang, NTT",
};

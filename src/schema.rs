//! schema.org JSON-LD blocks.

use serde_json::{json, Value};

use crate::config::{CONTACT, SITE};
use crate::contact::normalize_phone;
use crate::content::ServiceItem;

const CONTEXT: &str = "https://schema.org";
const TELEPHONE: &str = "+62-852-9838-9192";

fn same_as() -> Value {
    json!([
        format!("https://instagram.com/{}", CONTACT.instagram),
        format!("https://wa.me/{}", normalize_phone(CONTACT.whatsapp)),
    ])
}

fn provider() -> Value {
    json!({
        "@type": "Organization",
        "name": SITE.name,
        "url": SITE.url,
    })
}

pub fn website() -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "name": SITE.name,
        "url": SITE.url,
        "description": SITE.description,
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{}/search?q={{search_term_string}}", SITE.url),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

pub fn organization() -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "name": SITE.name,
        "url": SITE.url,
        "logo": format!("{}/ngodingin-512.png", SITE.url),
        "description": SITE.description,
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": TELEPHONE,
            "contactType": "customer service",
            "areaServed": "ID",
            "availableLanguage": "Indonesian",
        },
        "sameAs": same_as(),
    })
}

pub fn service() -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Service",
        "name": "Jasa Pembuatan Aplikasi untuk Tugas Akhir",
        "provider": provider(),
        "description": "Layanan konsultasi dan pembuatan aplikasi web untuk tugas akhir mahasiswa, skripsi, dan thesis dengan teknologi modern.",
        "serviceType": "Web Development",
        "areaServed": "Indonesia",
        "availableChannel": {
            "@type": "ServiceChannel",
            "serviceUrl": SITE.url,
            "servicePhone": TELEPHONE,
        },
    })
}

/// Positions start at 1.
pub fn breadcrumb(items: &[(&str, &str)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();
    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

const FAQ: &[(&str, &str)] = &[
    (
        "Berapa harga jasa pembuatan aplikasi untuk tugas akhir di Ngodingin?",
        "Harga mulai dari Rp 1.500.000 untuk aplikasi sederhana hingga Rp 5.000.000 untuk aplikasi kompleks. Harga tergantung kompleksitas fitur, teknologi yang digunakan, dan timeline pengerjaan.",
    ),
    (
        "Siapa saja tim developer di Ngodingin?",
        "Tim Ngodingin terdiri dari developer berpengalaman dengan keahlian dalam berbagai teknologi modern seperti React, Next.js, Node.js, Python, PHP, dan database management.",
    ),
    (
        "Apa saja produk dan layanan yang ditawarkan Ngodingin?",
        "Ngodingin menawarkan jasa pembuatan aplikasi web untuk tugas akhir, konsultasi IT, pengembangan sistem informasi, dan mentoring coding untuk mahasiswa.",
    ),
    (
        "Bagaimana cara menghubungi tim Ngodingin?",
        "Anda dapat menghubungi Ngodingin melalui WhatsApp di +62-852-9838-9192, email ngodingin@protonmail.com, atau Instagram @ngodingin-assist.",
    ),
];

pub fn faq() -> Value {
    let questions: Vec<Value> = FAQ
        .iter()
        .map(|(q, a)| {
            json!({
                "@type": "Question",
                "name": q,
                "acceptedAnswer": { "@type": "Answer", "text": a },
            })
        })
        .collect();
    json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

pub fn price_range() -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "PriceSpecification",
        "price": "1500000-5000000",
        "priceCurrency": "IDR",
        "description": "Harga jasa pembuatan aplikasi untuk tugas akhir",
    })
}

pub fn local_business() -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "LocalBusiness",
        "@id": SITE.url,
        "name": SITE.name,
        "description": SITE.description,
        "url": SITE.url,
        "telephone": TELEPHONE,
        "email": CONTACT.email,
        "areaServed": { "@type": "Country", "name": "Indonesia" },
        "serviceArea": { "@type": "Country", "name": "Indonesia" },
        "priceRange": "Rp 1.500.000 - Rp 5.000.000",
        "paymentAccepted": ["Bank Transfer", "E-Wallet", "Cash"],
        "openingHours": "Mo-Su 09:00-21:00",
        "sameAs": same_as(),
    })
}

pub fn services_item_list(services: &[ServiceItem]) -> Value {
    let items: Vec<Value> = services
        .iter()
        .enumerate()
        .map(|(i, s)| {
            json!({
                "@type": "Service",
                "position": i + 1,
                "name": s.title,
                "description": s.description,
                "provider": provider(),
            })
        })
        .collect();
    json!({
        "@context": CONTEXT,
        "@type": "ItemList",
        "name": "Layanan Ngodingin",
        "description": "Daftar lengkap layanan yang ditawarkan oleh Ngodingin",
        "itemListElement": items,
    })
}

/// Serialises a block for a `<script type="application/ld+json">` body.
/// `</` is escaped so text content cannot close the script element.
pub fn to_script_body(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    #[test]
    fn blocks_carry_context_and_type() {
        for (block, ty) in [
            (website(), "WebSite"),
            (organization(), "Organization"),
            (service(), "Service"),
            (faq(), "FAQPage"),
            (price_range(), "PriceSpecification"),
            (local_business(), "LocalBusiness"),
        ] {
            assert_eq!(block["@context"], "https://schema.org");
            assert_eq!(block["@type"], ty);
        }
    }

    #[test]
    fn website_search_action() {
        let w = website();
        assert_eq!(w["potentialAction"]["@type"], "SearchAction");
        assert_eq!(w["potentialAction"]["query-input"], "required name=search_term_string");
        assert_eq!(
            w["potentialAction"]["target"]["urlTemplate"],
            "https://www.ngodingin-assist.tech/search?q={search_term_string}"
        );
    }

    #[test]
    fn same_as_links_whatsapp_and_instagram() {
        let org = organization();
        assert_eq!(org["sameAs"][0], "https://instagram.com/ngodingin-assist");
        assert_eq!(org["sameAs"][1], "https://wa.me/6285298389192");
        assert_eq!(org["contactPoint"]["contactType"], "customer service");
    }

    #[test]
    fn breadcrumb_positions_are_one_based() {
        let b = breadcrumb(&[("Home", "https://x.tech/"), ("Layanan", "https://x.tech/services")]);
        let items = b["itemListElement"].as_array().map(Vec::len);
        assert_eq!(items, Some(2));
        assert_eq!(b["itemListElement"][0]["position"], 1);
        assert_eq!(b["itemListElement"][1]["item"], "https://x.tech/services");
        assert_eq!(b["itemListElement"][1]["@type"], "ListItem");
    }

    #[test]
    fn faq_entries_have_answers() {
        let f = faq();
        let entries = f["mainEntity"].as_array().cloned().unwrap_or_default();
        assert_eq!(entries.len(), 4);
        for e in entries {
            assert_eq!(e["@type"], "Question");
            assert_eq!(e["acceptedAnswer"]["@type"], "Answer");
        }
    }

    #[test]
    fn service_list_mirrors_content() {
        let list = services_item_list(SERVICES);
        assert_eq!(list["@type"], "ItemList");
        assert_eq!(list["itemListElement"].as_array().map(Vec::len), Some(SERVICES.len()));
        assert_eq!(list["itemListElement"][0]["name"], SERVICES[0].title);
        assert_eq!(list["itemListElement"][0]["position"], 1);
    }

    #[test]
    fn script_body_cannot_close_tag() {
        let body = to_script_body(&json!({ "text": "</script>" }));
        assert!(!body.contains("</script>"));
    }
}

//! Built-in catalog served when a collection has never been written.

use chrono::NaiveDate;

use fontspace_core::{Category, FileFormat, Price, PricingTier};

use crate::models::{
    BlogPost, Designer, DesignerApplication, DesignerSocialLinks, Font, Purchase, User,
    UserSocialLinks,
};

/// Fixed calendar date. All seed dates are valid, so the fallback is unreachable.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Seed font catalog.
#[must_use]
pub fn fonts() -> Vec<Font> {
    vec![
        Font {
            id: "1".into(),
            name: "Cyber Grotesk".to_owned(),
            designer: "Digital Studio".to_owned(),
            category: Category::SansSerif,
            pricing_tier: PricingTier::Free,
            languages: strings(&["English", "Latin"]),
            tags: strings(&["modern", "tech", "futuristic"]),
            description: "A futuristic sans-serif font perfect for Web3 and tech projects."
                .to_owned(),
            preview_image: None,
            file_url: "/fonts/cyber-grotesk.ttf".to_owned(),
            file_format: FileFormat::Ttf,
            file_size: 245_000,
            downloads: 1250,
            upload_date: date(2024, 1, 15),
            uploaded_by: "admin".into(),
            featured: true,
            trending: true,
            price: None,
            preview_url: None,
        },
        Font {
            id: "2".into(),
            name: "Neon Dreams".to_owned(),
            designer: "Future Type".to_owned(),
            category: Category::Display,
            pricing_tier: PricingTier::Freemium,
            languages: strings(&["English"]),
            tags: strings(&["neon", "glow", "display", "headers"]),
            description: "Bold display font with neon-inspired aesthetics for headlines."
                .to_owned(),
            preview_image: None,
            file_url: "/fonts/neon-dreams.otf".to_owned(),
            file_format: FileFormat::Otf,
            file_size: 180_000,
            downloads: 890,
            upload_date: date(2024, 1, 10),
            uploaded_by: "admin".into(),
            featured: true,
            trending: false,
            price: None,
            preview_url: Some("/fonts/neon-dreams-preview.otf".to_owned()),
        },
        Font {
            id: "3".into(),
            name: "Holographic Serif".to_owned(),
            designer: "Quantum Design".to_owned(),
            category: Category::Serif,
            pricing_tier: PricingTier::Premium,
            languages: strings(&["English", "French", "German"]),
            tags: strings(&["elegant", "holographic", "premium"]),
            description: "Elegant serif with holographic-inspired details.".to_owned(),
            preview_image: None,
            file_url: "/fonts/holographic-serif.ttf".to_owned(),
            file_format: FileFormat::Ttf,
            file_size: 320_000,
            downloads: 675,
            upload_date: date(2024, 1, 8),
            uploaded_by: "admin".into(),
            featured: false,
            trending: true,
            price: Some(Price::from_cents(2999)),
            preview_url: None,
        },
        Font {
            id: "4".into(),
            name: "Crypto Icons".to_owned(),
            designer: "Symbol Masters".to_owned(),
            category: Category::Symbol,
            pricing_tier: PricingTier::Free,
            languages: strings(&["Universal"]),
            tags: strings(&["crypto", "blockchain", "icons", "symbols"]),
            description: "Complete set of cryptocurrency and blockchain symbols.".to_owned(),
            preview_image: None,
            file_url: "/fonts/crypto-icons.ttf".to_owned(),
            file_format: FileFormat::Ttf,
            file_size: 150_000,
            downloads: 2100,
            upload_date: date(2024, 1, 12),
            uploaded_by: "admin".into(),
            featured: true,
            trending: true,
            price: None,
            preview_url: None,
        },
    ]
}

/// Seed designer profiles.
#[must_use]
pub fn designers() -> Vec<Designer> {
    vec![
        Designer {
            id: "1".into(),
            name: "Digital Studio".to_owned(),
            bio: "Pioneering digital typography for the Web3 era. Specializing in futuristic and tech-inspired fonts.".to_owned(),
            website: Some("https://digitalstudio.design".to_owned()),
            avatar: Some("https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=400".to_owned()),
            join_date: date(2023, 6, 15),
            total_fonts: 12,
            total_downloads: 15420,
            featured: true,
            social_links: Some(DesignerSocialLinks {
                twitter: Some("https://twitter.com/digitalstudio".to_owned()),
                dribbble: Some("https://dribbble.com/digitalstudio".to_owned()),
                ..DesignerSocialLinks::default()
            }),
        },
        Designer {
            id: "2".into(),
            name: "Future Type".to_owned(),
            bio: "Creating tomorrow's typography today. Award-winning type foundry focused on innovative display fonts.".to_owned(),
            website: Some("https://futuretype.co".to_owned()),
            avatar: Some("https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg?auto=compress&cs=tinysrgb&w=400".to_owned()),
            join_date: date(2023, 8, 22),
            total_fonts: 8,
            total_downloads: 9850,
            featured: true,
            social_links: Some(DesignerSocialLinks {
                instagram: Some("https://instagram.com/futuretype".to_owned()),
                behance: Some("https://behance.net/futuretype".to_owned()),
                ..DesignerSocialLinks::default()
            }),
        },
        Designer {
            id: "3".into(),
            name: "Quantum Design".to_owned(),
            bio: "Exploring the intersection of quantum physics and typography. Creating fonts that bend reality.".to_owned(),
            website: None,
            avatar: None,
            join_date: date(2023, 9, 10),
            total_fonts: 6,
            total_downloads: 7200,
            featured: false,
            social_links: None,
        },
    ]
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua...";

/// Seed blog posts.
#[must_use]
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "The Future of Typography in Web3".to_owned(),
            slug: "future-typography-web3".to_owned(),
            excerpt: "Exploring how blockchain technology and decentralized design are reshaping the world of digital typography.".to_owned(),
            content: LOREM.to_owned(),
            author: "Digital Studio".to_owned(),
            publish_date: date(2024, 1, 20),
            read_time: 8,
            tags: strings(&["web3", "typography", "blockchain", "design"]),
            featured: true,
            cover_image: Some("https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=800".to_owned()),
        },
        BlogPost {
            id: "2".into(),
            title: "Creating Neon Effects with Display Fonts".to_owned(),
            slug: "neon-effects-display-fonts".to_owned(),
            excerpt: "Learn how to create stunning neon glow effects using modern display fonts and CSS techniques.".to_owned(),
            content: LOREM.to_owned(),
            author: "Future Type".to_owned(),
            publish_date: date(2024, 1, 18),
            read_time: 6,
            tags: strings(&["design", "css", "neon", "effects"]),
            featured: false,
            cover_image: Some("https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg?auto=compress&cs=tinysrgb&w=800".to_owned()),
        },
        BlogPost {
            id: "3".into(),
            title: "Symbol Fonts: The Ultimate Guide".to_owned(),
            slug: "symbol-fonts-ultimate-guide".to_owned(),
            excerpt: "Everything you need to know about creating and using symbol fonts in modern web design.".to_owned(),
            content: LOREM.to_owned(),
            author: "Symbol Masters".to_owned(),
            publish_date: date(2024, 1, 15),
            read_time: 10,
            tags: strings(&["symbols", "icons", "fonts", "guide"]),
            featured: true,
            cover_image: Some("https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=800".to_owned()),
        },
    ]
}

/// Seed user accounts.
#[must_use]
pub fn users() -> Vec<User> {
    let admin = User {
        uploaded_fonts: vec!["1".into(), "2".into(), "3".into(), "4".into()],
        total_downloads: 4915,
        ..User::new(
            "admin".into(),
            "admin".to_owned(),
            "admin@fontspace.web3".to_owned(),
            date(2024, 1, 1),
        )
    };

    let type_master = User {
        bio: Some("Passionate about typography and design. Always looking for the perfect font for my projects.".to_owned()),
        title: Some("UI/UX Designer".to_owned()),
        location: Some("San Francisco, CA".to_owned()),
        website: Some("https://typemaster.design".to_owned()),
        verified: Some(true),
        avatar: Some("https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=400".to_owned()),
        social_links: Some(UserSocialLinks {
            twitter: Some("https://twitter.com/typemaster".to_owned()),
            github: Some("https://github.com/typemaster".to_owned()),
            dribbble: Some("https://dribbble.com/typemaster".to_owned()),
            ..UserSocialLinks::default()
        }),
        ..User::new(
            "user1".into(),
            "TypeMaster".to_owned(),
            "typemaster@example.com".to_owned(),
            date(2024, 1, 15),
        )
    };

    vec![admin, type_master]
}

/// Seed purchases.
#[must_use]
pub fn purchases() -> Vec<Purchase> {
    vec![Purchase {
        id: "purchase1".into(),
        user_id: "user1".into(),
        font_id: "3".into(),
        amount: Price::from_cents(2999),
        purchase_date: date(2024, 1, 20),
        public: true,
    }]
}

/// Seed designer applications (none).
#[must_use]
pub const fn designer_applications() -> Vec<DesignerApplication> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_are_real() {
        let epoch = NaiveDate::default();
        assert!(fonts().iter().all(|f| f.upload_date != epoch));
        assert!(users().iter().all(|u| u.join_date != epoch));
    }

    #[test]
    fn test_premium_seed_fonts_have_prices() {
        for font in fonts() {
            assert_eq!(font.is_premium(), font.price.is_some(), "{}", font.name);
        }
    }

    #[test]
    fn test_seed_purchase_references_seed_font() {
        let fonts = fonts();
        for purchase in purchases() {
            assert!(fonts.iter().any(|f| f.id == purchase.font_id));
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

use forecourt_client::AssetConfig;
use forecourt_model::{BusinessProfile, CatalogItem};

/// Escape a string for insertion into markup. Applied to every
/// externally-sourced string; URLs built internally pass through it too
/// since `&` must become `&amp;` inside attributes anyway.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[must_use]
pub fn render_page(
    profile: &BusinessProfile,
    items: &[CatalogItem],
    assets: &AssetConfig,
) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n{hero}\n{fleet}\n{contact}\n</body>\n</html>\n",
        title = escape_html(&profile.name),
        hero = render_hero(profile),
        fleet = render_fleet(profile, items, assets),
        contact = render_contact(profile),
    )
}

fn render_hero(profile: &BusinessProfile) -> String {
    format!(
        "<header class=\"hero\">\n<h1>{}</h1>\n<p class=\"tagline\">{}</p>\n<p>{}</p>\n\
         <a class=\"cta\" href=\"{}\">Book on WhatsApp</a>\n</header>",
        escape_html(&profile.name),
        escape_html(&profile.tagline),
        escape_html(&profile.description),
        escape_html(&profile.whatsapp_url()),
    )
}

fn render_fleet(profile: &BusinessProfile, items: &[CatalogItem], assets: &AssetConfig) -> String {
    let cards: String = items
        .iter()
        .map(|item| render_item(profile, item, assets))
        .collect();
    format!("<section id=\"fleet\" class=\"fleet-grid\">\n{cards}</section>")
}

fn render_item(profile: &BusinessProfile, item: &CatalogItem, assets: &AssetConfig) -> String {
    let badge = item
        .badge
        .as_deref()
        .map(|badge| format!("<span class=\"badge\">{}</span>", escape_html(badge)))
        .unwrap_or_default();
    let features: String = item
        .features
        .iter()
        .map(|feature| format!("<li>{}</li>", escape_html(feature)))
        .collect();
    let booking = profile.whatsapp_url_with(&format!("{} ({})", profile.whatsapp_message, item.name));
    format!(
        "<article class=\"car\" data-category=\"{category}\">\n{badge}\
         <img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\">\n\
         <h3>{name}</h3>\n<p class=\"category\">{category}</p>\n\
         <p class=\"price\">{price} <span class=\"unit\">{unit}</span></p>\n\
         <ul class=\"features\">{features}</ul>\n\
         <a class=\"cta\" href=\"{booking}\">Book</a>\n</article>\n",
        category = escape_html(&item.category),
        src = escape_html(&assets.resolve_image(item)),
        alt = escape_html(&item.image_alt),
        name = escape_html(&item.name),
        price = escape_html(&item.price),
        unit = escape_html(&item.unit),
        booking = escape_html(&booking),
    )
}

fn render_contact(profile: &BusinessProfile) -> String {
    format!(
        "<footer id=\"contact\">\n<p class=\"address\">{}</p>\n<p class=\"hours\">{}</p>\n\
         <a href=\"mailto:{email}\">{email}</a>\n\
         <p class=\"social\">{} / {}</p>\n</footer>",
        escape_html(&profile.address),
        escape_html(&profile.hours),
        escape_html(&profile.instagram),
        escape_html(&profile.facebook),
        email = escape_html(&profile.email),
    )
}

use crate::models::content::{Banner, Testimonial};
use crate::services::composer::{BlogTeaser, HomeView, RateView};
use crate::views::{calculator_section, escape, faq_section, hero_section, href, icon_grid, layout};

fn banners(items: &[Banner]) -> String {
    let mut out = String::from("<section class=\"banners\">\n");
    for (i, b) in items.iter().enumerate() {
        let direction = if i % 2 == 0 { "row" } else { "row-reverse" };
        let color = b
            .background_color
            .as_deref()
            .filter(|c| c.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == ' '))
            .unwrap_or("blue");
        out.push_str(&format!(
            "<article class=\"banner {direction}\" data-color=\"{}\"><h2>{}</h2><p>{}</p>",
            escape(color),
            escape(&b.title),
            escape(&b.subtitle)
        ));
        if let Some(text) = b.cta_text.as_deref() {
            let link = b.cta_link.as_deref().unwrap_or("#");
            out.push_str(&format!("<a class=\"cta\" href=\"{}\">{}</a>", href(link), escape(text)));
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
    out
}

fn rates(items: &[RateView]) -> String {
    let mut out = String::from(
        "<section class=\"exchange-rates\">\n<h2>Today's Exchange Rates</h2>\n<table>\n",
    );
    for r in items {
        out.push_str(&format!(
            "<tr><td>1 {}</td><td>=</td><td class=\"rate\">{} {}</td><td>{}</td></tr>\n",
            escape(&r.source_currency),
            escape(&r.rate),
            escape(&r.target_currency),
            r.updated.as_deref().map(escape).unwrap_or_default()
        ));
    }
    out.push_str("</table>\n<p class=\"disclaimer\">For informational purposes only</p>\n</section>\n");
    out
}

fn stars(rating: Option<f64>) -> String {
    let n = rating.unwrap_or(0.0).round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(n), "☆".repeat(5 - n))
}

fn testimonials(items: &[Testimonial]) -> String {
    let mut out = String::from("<section class=\"testimonials\">\n<h2>What Our Customers Say</h2>\n");
    for t in items {
        out.push_str(&format!(
            "<blockquote class=\"testimonial\"><p>{}</p><footer><span class=\"rating\">{}</span> {}{}</footer></blockquote>\n",
            escape(&t.quote),
            stars(t.rating),
            escape(&t.name),
            t.location.as_deref().map(|l| format!(", {}", escape(l))).unwrap_or_default()
        ));
    }
    out.push_str("</section>\n");
    out
}

fn blog(posts: &[BlogTeaser]) -> String {
    let mut out = String::from(
        "<section class=\"blog\">\n<h2>Latest Articles</h2>\n<p>Tips and insights about international money transfers</p>\n",
    );
    for p in posts {
        out.push_str(&format!(
            "<article class=\"blog-post\"><ul class=\"categories\">{}</ul><h3><a href=\"{}\">{}</a></h3>",
            p.categories
                .iter()
                .map(|c| format!("<li>{}</li>", escape(c)))
                .collect::<String>(),
            href(&p.href),
            escape(&p.title)
        ));
        if let Some(excerpt) = p.excerpt.as_deref() {
            out.push_str(&format!("<p>{}</p>", escape(excerpt)));
        }
        if let Some(published) = p.published.as_deref() {
            out.push_str(&format!("<time>{}</time>", escape(published)));
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
    out
}

pub fn render(view: &HomeView) -> String {
    let action = view.source.path();
    let mut body = hero_section(&view.hero, &calculator_section(&view.calculator, &action));

    if let Some(features) = &view.features {
        body.push_str(&icon_grid("features", "Why Choose Kyro", features));
    }
    if let Some(items) = &view.banners {
        body.push_str(&banners(items));
    }
    if let Some(items) = &view.exchange_rates {
        body.push_str(&rates(items));
    }
    if let Some(items) = &view.testimonials {
        body.push_str(&testimonials(items));
    }
    if let Some(faqs) = &view.faqs {
        body.push_str(&faq_section(faqs));
    }
    if let Some(posts) = &view.blog_posts {
        body.push_str(&blog(posts));
    }

    layout(&view.title, &body)
}

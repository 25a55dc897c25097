//! Server-side HTML. Every string that came from the CMS or the URL goes
//! through [`escape`] before it is written out.

pub mod home;
pub mod not_found;
pub mod send_money;
pub mod unavailable;

use crate::models::content::Faq;
use crate::services::composer::{CalculatorView, HeroView, IconItem};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Only same-site paths, fragments and http(s) URLs are emitted as links.
pub fn href(link: &str) -> String {
    let link = link.trim();
    let lower = link.to_ascii_lowercase();
    let safe = link.starts_with('/')
        || link.starts_with('#')
        || lower.starts_with("https://")
        || lower.starts_with("http://");
    if safe { escape(link) } else { "#".to_string() }
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n<header class=\"site-header\"><a href=\"/\">Kyro</a></header>\n\
         <main>\n{}</main>\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub(crate) fn hero_section(hero: &HeroView, extra: &str) -> String {
    format!(
        "<section class=\"hero\">\n<h1>{}</h1>\n<p class=\"subheading\">{}</p>\n\
         <a class=\"cta\" href=\"{}\">{}</a>\n{}</section>\n",
        escape(&hero.heading),
        escape(&hero.subheading),
        href(&hero.cta_link),
        escape(&hero.cta_text),
        extra
    )
}

pub(crate) fn calculator_section(calc: &CalculatorView, action: &str) -> String {
    let receive = match &calc.receive {
        Ok(amount) => format!("<output class=\"receive-amount\">{}</output>", escape(amount)),
        Err(note) => format!("<p class=\"calculator-note\">{}</p>", escape(note)),
    };
    format!(
        "<section id=\"calculator\" class=\"calculator\">\n<h2>Send Money Internationally</h2>\n\
         <form method=\"get\" action=\"{}\">\n<label for=\"amount\">You send ({})</label>\n\
         <input id=\"amount\" name=\"amount\" type=\"number\" min=\"0\" step=\"any\" value=\"{}\">\n\
         <button type=\"submit\">Calculate</button>\n</form>\n\
         <dl>\n<dt>Fee</dt><dd class=\"fee\">{}</dd>\n<dt>Rate</dt><dd class=\"rate\">{}</dd>\n\
         <dt>They receive ({})</dt><dd>{}</dd>\n</dl>\n</section>\n",
        href(action),
        escape(calc.source.code),
        calc.amount,
        escape(&calc.fee_display),
        escape(&calc.rate_label),
        escape(calc.target.code),
        receive
    )
}

pub(crate) fn icon_grid(class: &str, heading: &str, items: &[IconItem]) -> String {
    let mut out = format!("<section class=\"{class}\">\n<h2>{}</h2>\n<ul>\n", escape(heading));
    for item in items {
        out.push_str(&format!(
            "<li><span class=\"icon icon-{}\" aria-hidden=\"true\">{}</span><h3>{}</h3><p>{}</p></li>\n",
            item.icon.css_name(),
            item.icon.glyph(),
            escape(&item.title),
            escape(&item.description)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

pub(crate) fn faq_section(faqs: &[Faq]) -> String {
    let mut out =
        String::from("<section class=\"faqs\">\n<h2>Frequently Asked Questions</h2>\n");
    for faq in faqs {
        out.push_str(&format!(
            "<details class=\"faq\"><summary>{}</summary><div>{}</div></details>\n",
            escape(&faq.question),
            escape(&faq.answer)
        ));
    }
    out.push_str("</section>\n");
    out
}

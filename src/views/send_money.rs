use crate::services::composer::{DeliveryView, SendMoneyView};
use crate::views::{calculator_section, escape, faq_section, hero_section, icon_grid, layout};

fn corridor(view: &SendMoneyView) -> String {
    let (src, dst) = (view.source, view.target);
    format!(
        "<nav class=\"breadcrumb\"><a href=\"/{}\">{}</a> → <span>{}</span></nav>\n\
         <div class=\"corridor\"><span>Send {} {}</span> → <span>Receive {} {}</span> \
         <span class=\"rate\">Rate {}</span></div>\n",
        escape(src.code),
        escape(src.name),
        escape(dst.name),
        src.flag,
        escape(src.currency.code),
        dst.flag,
        escape(dst.currency.code),
        escape(&view.rate_display)
    )
}

fn delivery_options(options: &[DeliveryView]) -> String {
    let mut out = String::from("<section class=\"delivery-options\">\n<h2>Delivery Options</h2>\n<ul>\n");
    for o in options {
        out.push_str(&format!(
            "<li><h3>{}</h3>{}{}</li>\n",
            escape(&o.name),
            o.duration
                .as_deref()
                .map(|d| format!("<p class=\"duration\">{}</p>", escape(d)))
                .unwrap_or_default(),
            o.fee
                .as_deref()
                .map(|f| format!("<p class=\"fee\">Fee {}</p>", escape(f)))
                .unwrap_or_default()
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

pub fn render(view: &SendMoneyView) -> String {
    let action = view.source.transfer_path(view.target);
    let mut body = corridor(view);
    body.push_str(&hero_section(&view.hero, ""));

    if let Some(benefits) = &view.benefits {
        let heading = format!("Why send money to {} with Kyro", view.target.name);
        body.push_str(&icon_grid("benefits", &heading, benefits));
    }
    body.push_str(&calculator_section(&view.calculator, &action));
    if let Some(options) = &view.delivery_options {
        body.push_str(&delivery_options(options));
    }
    if let Some(faqs) = &view.faqs {
        body.push_str(&faq_section(faqs));
    }

    layout(&view.title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::SendMoneyPage;
    use crate::models::country::lookup;
    use crate::models::demo;
    use crate::services::composer::{compose_send_money, PageContext};
    use chrono::Utc;

    fn ctx(code: &str) -> PageContext {
        PageContext { source: lookup(code).unwrap(), now: Utc::now(), amount: None }
    }

    #[test]
    fn demo_pair_renders_all_sections() {
        let (us, india) = (lookup("us").unwrap(), lookup("in").unwrap());
        let html = render(&compose_send_money(&ctx("us"), india, demo::send_money_page(us, india), true));
        assert!(html.contains("Send Money from United States to India"));
        assert_eq!(html.matches("<details class=\"faq\">").count(), 5);
        assert!(html.contains("class=\"delivery-options\""));
        assert!(html.contains("action=\"/us/send-to/in\""));
        assert!(html.contains("₹83,166.84"));
    }

    #[test]
    fn bare_document_omits_optional_sections() {
        let html = render(&compose_send_money(&ctx("gb"), lookup("eu").unwrap(), SendMoneyPage::default(), false));
        assert!(!html.contains("class=\"faqs\""));
        assert!(!html.contains("class=\"benefits\""));
        assert!(!html.contains("class=\"delivery-options\""));
        assert!(html.contains("id=\"calculator\""));
    }
}

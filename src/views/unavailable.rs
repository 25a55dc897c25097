use crate::services::pages::Unavailable;
use crate::views::{escape, layout};

pub fn render(u: &Unavailable) -> String {
    let (src, dst) = (u.source, u.target);
    let body = format!(
        "<section class=\"unavailable\">\n\
         <nav class=\"breadcrumb\"><a href=\"/{code}\">{src_name}</a> → <span>{dst_name}</span></nav>\n\
         <h1>{title}</h1>\n<p class=\"alert\" role=\"alert\">{message}</p>\n<p>{description}</p>\n\
         <a class=\"cta\" href=\"/{code}\">Back to {src_name}</a>\n\
         <a href=\"/api/countries\">View All Countries</a>\n</section>\n",
        code = escape(src.code),
        src_name = escape(src.name),
        dst_name = escape(dst.name),
        title = escape(&u.title()),
        message = escape(&u.message()),
        description = escape(&u.description()),
    );
    layout(&format!("{} | Kyro", u.title()), &body)
}

use crate::views::layout;

pub fn render() -> String {
    layout(
        "Country Not Found | Kyro",
        "<section class=\"not-found\">\n<h1>Country Not Found</h1>\n\
         <p>Sorry, we couldn&#39;t find the country you&#39;re looking for or it&#39;s not supported yet.</p>\n\
         <a class=\"cta\" href=\"/\">Go to Homepage</a>\n</section>\n",
    )
}

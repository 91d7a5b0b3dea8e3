//! Server-rendered pages: the post-submission confirmation page and the
//! embedded admin page.

use submission::Directive;

/// Escape text for interpolation into an HTML document.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}

/// Confirmation page shown after a submission, success or not.
pub fn confirmation_page(directive: &Directive) -> String {
    let heading = if directive.ok {
        "Thanks for your review!"
    } else {
        "Your review was not saved"
    };

    let detail = match (&directive.id, &directive.message) {
        (Some(id), _) => format!("<p>Review recorded as {}.</p>", escape(id)),
        (_, Some(message)) => format!("<p>{}</p>", escape(message)),
        _ => String::new(),
    };

    let body = format!(
        "<h1>{heading}</h1>\n{detail}\n<p><a href=\"{}\">Continue shopping</a></p>",
        escape(&directive.return_to)
    );
    page("Review submitted", &body)
}

/// Error page for requests rejected before they reach the pipeline.
pub fn error_page(message: &str) -> String {
    page("Request rejected", &format!("<h1>{}</h1>", escape(message)))
}

/// The embedded admin page. Reviews themselves live in the platform admin
/// as metaobject entries; this page only documents the install.
pub fn admin_page() -> String {
    let body = "<h1>Product reviews</h1>\n\
         <p>Reviews submitted through the storefront form are created as\n\
         <code>product_review</code> metaobject entries and published immediately.</p>\n\
         <p>Point the storefront form at <code>/apps/reviews</code> under the app proxy.</p>";
    page("Product reviews", body)
}

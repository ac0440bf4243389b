use maud::{DOCTYPE, Markup, html};

// Bootstrap is loaded from a CDN, so the styles are Bootstrap classes.

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "btn btn-primary";

// Form styles
pub const FORM_GROUP_STYLE: &str = "mb-3";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-control";
pub const FORM_CHECK_GROUP_STYLE: &str = "mb-3 form-check";
pub const FORM_CHECK_INPUT_STYLE: &str = "form-check-input";
pub const FORM_CHECK_LABEL_STYLE: &str = "form-check-label";

// Table styles
pub const TABLE_STYLE: &str = "table table-striped table-bordered table-hover";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "container mt-4";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const HTMX_SCRIPT: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finance App" }
                link href=(BOOTSTRAP_CSS) rel="stylesheet";

                script src=(HTMX_SCRIPT) {}
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="container py-5"
        {
            div class="mx-auto text-center"
            {
                h1 class="display-1 fw-bold text-primary" { (header) }

                p class="fs-3 fw-bold" { (description) }

                p class="fs-5" { (fix) }

                a href="/" class="btn btn-primary my-4" { "Back to Homepage" }
            }
        }
    );

    base(title, &content)
}

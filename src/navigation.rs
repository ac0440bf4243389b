//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "nav-link active"
        } else {
            "nav-link"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![Link {
            url: endpoints::ROOT,
            title: "Transactions",
            is_current: active_endpoint == endpoints::ROOT,
        }];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="navbar navbar-expand navbar-dark bg-primary"
            {
                div class="container-fluid"
                {
                    a class="navbar-brand" href=(endpoints::ROOT) { "Finance App" }

                    ul class="navbar-nav"
                    {
                        @for link in self.links {
                            li class="nav-item" { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}

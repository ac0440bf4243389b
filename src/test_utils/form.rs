use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_value = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_value, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {hx_value:?}"
    );
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str) -> ElementRef<'a> {
    form.select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""))
}

/// Check the type of the input called `name` and whether it is marked required.
#[track_caller]
pub(crate) fn assert_form_input<'a>(
    form: &ElementRef<'a>,
    name: &str,
    type_: &str,
    required: bool,
) -> ElementRef<'a> {
    let input = must_get_input(form, name);
    let input_type = input.value().attr("type").unwrap_or_default();
    let input_required = input.value().attr("required").is_some();

    assert_eq!(
        input_type, type_,
        "want input {name} with type \"{type_}\", got {input_type:?}"
    );
    assert_eq!(
        input_required, required,
        "want input {name} to have required={required}, got {input_required}"
    );

    input
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(form: &ElementRef<'_>, name: &str, value: &str) {
    let input = must_get_input(form, name);

    if input.value().attr("type") == Some("checkbox") {
        let checked = input.value().attr("checked").is_some();
        let want_checked = value == "on";
        assert_eq!(
            checked, want_checked,
            "want checkbox {name} checked={want_checked}, got {checked}"
        );
    } else {
        let input_value = input.value().attr("value").unwrap_or_default();
        assert_eq!(
            input_value, value,
            "want input {name} with value \"{value}\", got {input_value:?}"
        );
    }
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}

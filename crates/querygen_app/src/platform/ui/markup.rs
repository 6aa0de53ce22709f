use querygen_core::{Card, CardRef, Notification};

const COPY_GLYPH: &str = "📋";

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub fn placeholder(text: &str) -> String {
    format!("<div class=\"text-muted\">{}</div>", escape_html(text))
}

fn save_label(card: &Card) -> &'static str {
    if card.marked_saved {
        "Saved"
    } else {
        "Save"
    }
}

pub fn result_card(card: &Card, source: CardRef) -> String {
    let text = escape_html(&card.text);
    format!(
        "<div class=\"query-box\">\
         <button class=\"save-btn\" data-action=\"save\" data-payload=\"{text}\" data-source=\"{source}\">{label}</button>\
         <button class=\"copy-btn\" data-action=\"copy\" data-payload=\"{text}\">{COPY_GLYPH}</button>\
         <div class=\"query-content\">{text}</div>\
         </div>",
        label = save_label(card),
    )
}

pub fn suggestion_card(card: &Card, source: CardRef) -> String {
    let text = escape_html(&card.text);
    format!(
        "<div class=\"ai-suggestion p-2 mb-2 border rounded\">\
         <div class=\"d-flex justify-content-between align-items-center\">\
         <div class=\"ai-text\">{text}</div>\
         <div class=\"ai-actions\">\
         <button class=\"btn btn-sm btn-outline-secondary me-1\" data-action=\"copy\" data-payload=\"{text}\">{COPY_GLYPH}</button>\
         <button class=\"btn btn-sm btn-primary\" data-action=\"save\" data-payload=\"{text}\" data-source=\"{source}\">{label}</button>\
         </div></div></div>",
        label = save_label(card),
    )
}

pub fn saved_row(query: &str) -> String {
    let text = escape_html(query);
    format!(
        "<li class=\"list-group-item d-flex justify-content-between align-items-center\">\
         <div class=\"small\">{text}</div>\
         <div>\
         <button class=\"btn btn-sm btn-outline-secondary me-1\" data-action=\"copy\" data-payload=\"{text}\">{COPY_GLYPH}</button>\
         <button class=\"btn btn-sm btn-danger\" data-action=\"remove\" data-payload=\"{text}\">Remove</button>\
         </div></li>"
    )
}

pub fn notification(notification: &Notification) -> String {
    format!(
        "<div class=\"alert alert-success\" role=\"status\" data-notification-id=\"{}\">{}</div>",
        notification.id,
        escape_html(&notification.message)
    )
}

pub fn card() -> String {
    "background:#fff; border:1px solid #e5e5e5; border-radius:12px; padding:16px;".into()
}
pub fn label() -> String {
    "display:block; font-size: 13px; font-weight:600; color:#444; margin-bottom: 6px;".into()
}
pub fn input() -> String {
    "width:100%; box-sizing:border-box; border:1px solid #d5d5d5; border-radius:10px; padding:10px;".into()
}
pub fn btn_primary() -> String {
    "padding:10px 12px; border-radius:10px; border:1px solid #1b66ff; background:#1b66ff; color:#fff; cursor:pointer;"
        .into()
}
pub fn btn_google() -> String {
    "width:100%; padding:12px; border-radius:10px; border:1px solid #e04a3a; background:#e04a3a; color:#fff; cursor:pointer;"
        .into()
}
pub fn btn_resend() -> String {
    "margin-top:8px; padding:8px 12px; border-radius:10px; border:1px solid #1f9d55; background:#1f9d55; color:#fff; cursor:pointer;"
        .into()
}
pub fn error_text() -> String {
    "text-align:center; color:#d33; margin: 12px 0;".into()
}

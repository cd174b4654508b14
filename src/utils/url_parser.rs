/// Host (and port) part of a URL, for display.
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    let s = s.split_once("://").map(|(_, rest)| rest).unwrap_or(s);
    s.split(['/', '?']).next().unwrap_or_default().to_string()
}

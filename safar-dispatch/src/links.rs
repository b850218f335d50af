use safar_core::phone::digits_only;

/// Custom scheme loaded by the hidden probe to detect the installed app.
pub const APP_PROBE_URL: &str = "whatsapp://";

const NATIVE_SEND_URL: &str = "whatsapp://send";
const MOBILE_API_SEND_URL: &str = "https://api.whatsapp.com/send";
const DESKTOP_WEB_SEND_URL: &str = "https://web.whatsapp.com/send";

fn send_url(base: &str, phone: &str, message: &str) -> String {
    format!(
        "{}?phone={}&text={}",
        base,
        digits_only(phone),
        urlencoding::encode(message)
    )
}

/// Deep link into the installed mobile app.
pub fn native_app_url(phone: &str, message: &str) -> String {
    send_url(NATIVE_SEND_URL, phone, message)
}

/// Mobile web endpoint. Also the universal fallback when everything else
/// goes wrong.
pub fn mobile_api_url(phone: &str, message: &str) -> String {
    send_url(MOBILE_API_SEND_URL, phone, message)
}

/// Desktop web client endpoint.
pub fn desktop_web_url(phone: &str, message: &str) -> String {
    send_url(DESKTOP_WEB_SEND_URL, phone, message)
}

use super::{escape, field_error, layout};
use crate::errors::ValidationErrors;
use crate::models::{GeoPoint, LoginForm};

pub fn login_page(form: Option<&LoginForm>, errors: Option<&ValidationErrors>) -> String {
    let email = form.map(|f| escape(&f.email)).unwrap_or_default();
    let email_error = field_error(errors, "email");
    let password_error = field_error(errors, "password");

    let body = format!(
        r#"<section class="hero hero-login">
  <h1>CitizExperience</h1>
  <p>Your portal to seamless civic engagement.</p>
</section>
<div class="card">
  <h2>Welcome Back</h2>
  <p class="muted">Sign in to continue to your account.</p>
  <form method="post" action="/login" novalidate>
    <label for="email">Email Address</label>
    <input id="email" type="email" name="email" placeholder="john.doe@example.com" value="{email}">
    {email_error}
    <label for="password">Password</label>
    <input id="password" type="password" name="password" placeholder="••••••••">
    {password_error}
    <button type="submit" class="primary">Sign In</button>
  </form>
  <p class="muted small"><a href="/">Forgot Password?</a></p>
</div>"#
    );
    layout("Sign In", &body)
}

pub fn home_page() -> String {
    let body = r#"<header class="topbar">
  <span class="brand">CitizExperience</span>
  <nav><a href="/map">Location</a> <a href="/">Sign In</a></nav>
</header>
<section class="hero">
  <h1>Welcome, Citizen!</h1>
  <p>Your portal to seamless civic engagement. Book your visit and find your way to us with ease.</p>
</section>
<div class="card">
  <h2>Plan Your Visit</h2>
  <p>Reserve your spot at the CitizExperience Center. Our new booking process makes it easier than ever.</p>
  <a class="button primary" href="/book/date">Book Your Visit</a>
  <a class="button" href="/map">Find Us</a>
</div>"#;
    layout("Home", body)
}

pub fn map_page(center_name: &str, center: GeoPoint) -> String {
    let name = escape(center_name);
    let embed = format!(
        "https://maps.google.com/maps?q={},{}&z=15&output=embed",
        center.lat, center.lng
    );

    let body = format!(
        r#"<a class="button back" href="/home">&larr; Back to Home</a>
<div class="card wide">
  <h2>Our Location</h2>
  <p class="muted">Our center is located in the heart of the city.</p>
  <iframe class="map" title="Map showing location of the experience center" src="{embed}" loading="lazy"></iframe>
  <p><strong>{name}</strong></p>
  <button id="get-directions" class="primary" type="button">Get Directions</button>
  <div id="toast" class="notice notice-error" role="alert" hidden></div>
</div>
<dialog id="route-dialog">
  <h3>Your Recommended Route</h3>
  <p id="route-text">Loading your personalized route...</p>
  <form method="dialog"><button class="primary">Close</button></form>
</dialog>
<script src="/static/map.js"></script>"#,
        embed = escape(&embed),
    );
    layout("Our Location", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_echoes_email_and_errors() {
        let form = LoginForm {
            email: "bad<email".to_string(),
            password: String::new(),
        };
        let mut errors = ValidationErrors::default();
        errors.push("password", "Password is required.");
        let html = login_page(Some(&form), Some(&errors));
        assert!(html.contains(r#"value="bad&lt;email""#));
        assert!(html.contains("Password is required."));
    }

    #[test]
    fn test_map_page_embeds_center() {
        let html = map_page("Kalamandir", GeoPoint { lat: 19.5, lng: 73.25 });
        assert!(html.contains("q=19.5,73.25"));
        assert!(html.contains("Get Directions"));
        assert!(html.contains("/static/map.js"));
    }
}

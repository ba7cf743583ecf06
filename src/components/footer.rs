//! Site Footer Component
//!
//! Location, hours and contact columns with the copyright line.

use leptos::prelude::*;

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <h3>"Location"</h3>
                    <p>"Bishoftu" <br/> "547 street bishoftu"</p>
                </div>
                <div>
                    <h3>"Hours"</h3>
                    <p>"Monday - Friday: 7am - 8pm" <br/> "Saturday - Sunday: 8am - 7pm"</p>
                </div>
                <div>
                    <h3>"Contact"</h3>
                    <p>"Phone: (+251) 34785433" <br/> "Email: hello@Tomoca.com"</p>
                </div>
            </div>
            <div class="footer-copyright">
                <p>{format!("© {} Tomoca. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}

//! Page rendering
//!
//! Each section is its own function so tests can inspect them in isolation.
//! Class names and `data-testid` keys are part of the page's public contract.

use landing_core::{FeatureEntry, TransientIndicator, FEATURES, FOOTER, HERO};
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const PAGE_TITLE: &str = "Landing Page";

/// Full document: hero, features and footer inside a single `<main>`,
/// followed by the click handler for the call-to-action button
pub fn home_page(indicator: &TransientIndicator) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                meta name="description" content=(HERO.subtitle);
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    (hero_section(indicator))
                    (features_section(&FEATURES))
                    (footer())
                }
                script { (PreEscaped(INDICATOR_JS)) }
            }
        }
    }
}

/// Hero block with the call-to-action button
pub fn hero_section(indicator: &TransientIndicator) -> Markup {
    let config = indicator.config();
    html! {
        section class="hero-section" {
            div class="hero-content" {
                h1 class="hero-title" { (HERO.title) }
                p class="hero-subtitle" { (HERO.subtitle) }
                button
                    type="button"
                    class="cta-button"
                    data-testid="cta-button"
                    data-state=(indicator.state().as_str())
                    data-default-label=(config.labels.default)
                    data-confirm-label=(config.labels.confirmation)
                    data-revert-ms=(config.delay.as_millis() as u64)
                {
                    (indicator.label())
                }
            }
        }
    }
}

/// Feature grid, one card per entry in input order
pub fn features_section(features: &[FeatureEntry]) -> Markup {
    html! {
        section class="features-section" {
            div class="features-grid" {
                @for (index, feature) in features.iter().enumerate() {
                    (feature_card(index, feature))
                }
            }
        }
    }
}

fn feature_card(index: usize, feature: &FeatureEntry) -> Markup {
    html! {
        div class="feature-card" data-testid=(format!("feature-card-{index}")) {
            div class="feature-icon" { (feature.icon) }
            h3 class="feature-title" { (feature.title) }
            p class="feature-description" { (feature.description) }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer class="footer" {
            p { (FOOTER.copyright) }
            p { (FOOTER.credit) }
        }
    }
}

/// Browser side of the indicator, driven by the button's `data-*` attributes.
/// Each click clears the pending reversion before scheduling a new one.
const INDICATOR_JS: &str = r#"
document.querySelectorAll('[data-testid="cta-button"]').forEach(function (button) {
  var pending = null;
  button.addEventListener('click', function () {
    clearTimeout(pending);
    button.textContent = button.dataset.confirmLabel;
    button.dataset.state = 'activated';
    pending = setTimeout(function () {
      pending = null;
      button.textContent = button.dataset.defaultLabel;
      button.dataset.state = 'default';
    }, Number(button.dataset.revertMs));
  });
});
"#;

const PAGE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  line-height: 1.6;
  color: #1f2937;
}
.hero-section {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  color: #fff;
  padding: 6rem 1.5rem;
  text-align: center;
}
.hero-content { max-width: 48rem; margin: 0 auto; }
.hero-title { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
.hero-subtitle { font-size: 1.25rem; opacity: 0.9; margin-bottom: 2rem; }
.cta-button {
  background: #fff;
  color: #667eea;
  border: none;
  border-radius: 9999px;
  padding: 1rem 2.5rem;
  font-size: 1.125rem;
  font-weight: 600;
  cursor: pointer;
  transition: transform 0.2s ease;
}
.cta-button:hover { transform: translateY(-2px); }
.features-section { padding: 5rem 1.5rem; background: #f9fafb; }
.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 2rem;
  max-width: 72rem;
  margin: 0 auto;
}
.feature-card {
  background: #fff;
  border-radius: 1rem;
  padding: 2rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
  text-align: center;
}
.feature-icon { font-size: 2.5rem; margin-bottom: 1rem; }
.feature-title { font-size: 1.25rem; margin-bottom: 0.5rem; }
.feature-description { color: #6b7280; }
.footer {
  background: #111827;
  color: #9ca3af;
  text-align: center;
  padding: 2rem 1.5rem;
}
"#;

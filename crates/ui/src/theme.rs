//! Brand palette and the site stylesheet.

pub const CAROLINA_BLUE: &str = "#7BAFD4";
pub const NAVY: &str = "#13294B";
pub const GOLD: &str = "#FCD34D";

/// Card art fill for a color tag. Only `gold` is special-cased.
#[must_use]
pub fn card_fill(color_tag: &str) -> &'static str {
    if color_tag.eq_ignore_ascii_case("gold") { GOLD } else { CAROLINA_BLUE }
}

pub const GLOBAL_CSS: &str = r"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap');

:root {
  --carolina: #7BAFD4;
  --navy: #13294B;
  --white: #FFFFFF;
  --off-white: #F8F9FA;
  --text: #1F2937;
  --light-gray: #E5E7EB;
  --muted: #6B7280;
  --body: #374151;
}

body, html {
  margin: 0;
  padding: 0;
  font-family: 'Inter', sans-serif;
  background-color: var(--off-white);
  color: var(--text);
  overflow-x: hidden;
}

* { box-sizing: border-box; }

::-webkit-scrollbar { width: 8px; }
::-webkit-scrollbar-track { background: #f1f1f1; }
::-webkit-scrollbar-thumb { background: var(--carolina); border-radius: 4px; }
::-webkit-scrollbar-thumb:hover { background: var(--navy); }

.container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }
.section { padding: 80px 0; }

.argyle-bg {
  position: absolute;
  inset: 0;
  background-color: var(--carolina);
  background-image:
    linear-gradient(45deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy)),
    linear-gradient(135deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy)),
    linear-gradient(45deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy)),
    linear-gradient(135deg, var(--navy) 12.5%, transparent 12.5%, transparent 87.5%, var(--navy) 87.5%, var(--navy));
  background-size: 60px 60px;
  background-position: 0 0, 0 0, 30px 30px, 30px 30px;
  opacity: 0.1;
  z-index: 0;
}

.loading-container {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100vh;
  background-color: var(--off-white);
  flex-direction: column;
  gap: 20px;
}
.spinner {
  width: 50px;
  height: 50px;
  border: 5px solid var(--light-gray);
  border-top: 5px solid var(--carolina);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}
@keyframes spin {
  0% { transform: rotate(0deg); }
  100% { transform: rotate(360deg); }
}

.btn-primary, .btn-outline {
  padding: 12px 24px;
  border-radius: 6px;
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  transition: all 0.2s ease;
  font-family: inherit;
}
.btn-primary {
  background-color: var(--navy);
  color: var(--white);
  border: none;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
}
.btn-outline { background-color: transparent; color: var(--navy); border: 2px solid var(--navy); }

.icon { display: inline-flex; }
.icon-accent { color: var(--carolina); }

/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  padding: 20px 0;
  background-color: transparent;
  transition: all 0.3s ease;
}
.site-header.scrolled {
  background-color: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(10px);
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}
.header-row { display: flex; justify-content: space-between; align-items: center; }
.logo { display: flex; align-items: center; gap: 10px; cursor: pointer; background: none; border: none; }
.logo-mark {
  width: 40px;
  height: 40px;
  background-color: var(--carolina);
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 4px;
  transform: rotate(45deg);
  box-shadow: 0 4px 10px rgba(123, 175, 212, 0.5);
}
.logo-mark span { transform: rotate(-45deg); color: white; font-weight: bold; font-size: 1.2rem; }
.logo-text { display: flex; flex-direction: column; margin-left: 12px; text-align: left; }
.brand-name { font-size: 1.25rem; font-weight: 800; color: var(--navy); letter-spacing: -0.02em; line-height: 1; }
.brand-suffix { font-size: 1.25rem; font-weight: 300; color: var(--carolina); letter-spacing: 0.15em; line-height: 1; }
.desktop-nav { display: flex; gap: 32px; align-items: center; }
.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--navy);
  font-weight: 500;
  font-size: 0.95rem;
  font-family: inherit;
}
.nav-link.active { border-bottom: 2px solid var(--carolina); }
.nav-contact {
  background: var(--navy);
  border: none;
  cursor: pointer;
  color: white;
  padding: 8px 16px;
  border-radius: 4px;
  font-weight: 600;
  font-size: 0.9rem;
}
.nav-cart { background: none; border: none; cursor: pointer; color: var(--navy); }
.mobile-toggle { display: none; background: none; border: none; color: var(--navy); cursor: pointer; }
.mobile-nav {
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  background-color: white;
  padding: 20px;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  display: flex;
  flex-direction: column;
  gap: 16px;
}
.mobile-nav .nav-link { font-weight: 600; font-size: 1.1rem; text-align: center; }
@media (max-width: 768px) {
  .desktop-nav { display: none !important; }
  .mobile-toggle { display: block !important; }
}

/* Home */
.hero { position: relative; min-height: 90vh; display: flex; align-items: center; padding-top: 80px; overflow: hidden; }
.hero .argyle-bg { opacity: 0.15; z-index: -1; }
.hero-glow {
  position: absolute;
  top: 20%;
  right: -10%;
  width: 600px;
  height: 600px;
  background: radial-gradient(circle, var(--carolina) 0%, transparent 70%);
  opacity: 0.2;
  filter: blur(60px);
  z-index: -1;
}
.hero-copy { max-width: 600px; }
.hero-badge {
  display: inline-block;
  padding: 6px 12px;
  background-color: rgba(19, 41, 75, 0.1);
  color: var(--navy);
  border-radius: 50px;
  font-size: 0.875rem;
  font-weight: 600;
  margin-bottom: 24px;
  border: 1px solid rgba(19, 41, 75, 0.1);
}
.hero h1 { font-size: clamp(2.5rem, 5vw, 4.5rem); font-weight: 800; color: var(--navy); line-height: 1.1; margin-bottom: 24px; }
.highlight { color: var(--carolina); }
.hero-subtext { font-size: 1.25rem; color: #4B5563; margin-bottom: 40px; line-height: 1.6; max-width: 480px; }
.hero-actions { display: flex; gap: 16px; flex-wrap: wrap; }
.hero-actions .btn-primary { box-shadow: 0 10px 20px rgba(19, 41, 75, 0.2); }

.features { background-color: var(--white); }
.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 40px; }
.feature-card {
  padding: 32px;
  border-radius: 16px;
  background-color: var(--off-white);
  border: 1px solid var(--light-gray);
  transition: transform 0.2s ease;
}
.feature-card:hover { transform: translateY(-5px); }
.feature-icon {
  width: 48px;
  height: 48px;
  background-color: rgba(123, 175, 212, 0.15);
  border-radius: 12px;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 20px;
}
.feature-card h3 { font-size: 1.25rem; font-weight: 700; color: var(--navy); margin-bottom: 12px; }
.feature-card p { color: var(--muted); line-height: 1.6; }

.section-heading { text-align: center; margin-bottom: 60px; }
.section-heading h2 { font-size: 2.5rem; font-weight: 800; color: var(--navy); margin-bottom: 16px; }
.section-heading p { color: var(--muted); max-width: 600px; margin: 0 auto; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 32px; }
.view-all { text-align: center; margin-top: 60px; }
.view-all .btn-outline { padding: 16px 48px; }

.product-card {
  background-color: var(--white);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05);
  border: 1px solid var(--light-gray);
  display: flex;
  flex-direction: column;
  transition: all 0.3s ease;
  cursor: pointer;
  position: relative;
}
.product-card:hover { transform: translateY(-4px); box-shadow: 0 12px 20px rgba(0, 0, 0, 0.08); }
.product-stage {
  height: 280px;
  background-color: #F3F4F6;
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}
.product-stage::before {
  content: '';
  position: absolute;
  inset: 0;
  opacity: 0.1;
  background-image: repeating-linear-gradient(45deg, var(--navy) 0, var(--navy) 1px, transparent 0, transparent 50%);
  background-size: 10px 10px;
}
.product-art {
  width: 160px;
  height: 220px;
  border-radius: 8px;
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
  transform: rotate(-5deg);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 10px;
  border: 4px solid white;
}
.product-art-window { width: 100%; height: 50%; background: rgba(255, 255, 255, 0.3); border-radius: 4px 4px 0 0; }
.product-art-badge { width: 60%; height: 40%; background: var(--navy); border-radius: 50%; margin-top: -20px; border: 2px solid white; }
.product-tag {
  position: absolute;
  top: 12px;
  left: 12px;
  background-color: var(--navy);
  color: white;
  padding: 4px 8px;
  border-radius: 4px;
  font-size: 0.75rem;
  font-weight: bold;
}
.product-body { padding: 20px; }
.product-body h3 { font-size: 1.1rem; font-weight: 700; color: var(--navy); margin-bottom: 8px; }
.product-meta { display: flex; justify-content: space-between; align-items: center; }
.product-price { font-size: 1.25rem; font-weight: 600; color: var(--text); }
.product-cta { font-size: 0.875rem; color: var(--carolina); font-weight: 500; }

.about-preview { background-color: var(--navy); color: var(--white); }
.about-preview-body { display: flex; flex-direction: column; align-items: center; text-align: center; }
.about-initials {
  width: 80px;
  height: 80px;
  background-color: white;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 32px;
  font-size: 2rem;
  font-weight: bold;
  color: var(--navy);
}
.about-preview h2 { font-size: clamp(2rem, 4vw, 3rem); font-weight: 800; margin-bottom: 24px; }
.about-preview p { max-width: 700px; font-size: 1.2rem; line-height: 1.8; color: #E0E7FF; margin-bottom: 40px; }
.accent-rule { width: 100px; height: 4px; background-color: var(--carolina); border-radius: 2px; }

/* Inner pages */
.page { padding-top: 80px; background-color: var(--off-white); min-height: 100vh; }
.page-banner { background-color: var(--navy); padding: 80px 0 60px; color: var(--white); position: relative; overflow: hidden; }
.page-banner .container { position: relative; z-index: 1; text-align: center; }
.page-banner h1 { font-size: clamp(2.5rem, 5vw, 4rem); font-weight: 800; margin-bottom: 20px; }
.page-banner p { font-size: 1.2rem; color: var(--carolina); max-width: 600px; margin: 0 auto; }
.page-body { padding: 60px 20px 80px; }
.narrow { max-width: 800px; margin: 0 auto; display: flex; flex-direction: column; gap: 60px; }

.mission-card {
  text-align: center;
  padding: 40px;
  background-color: var(--white);
  border-radius: 16px;
  border: 1px solid var(--light-gray);
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
}
.mission-card h2 { color: var(--navy); font-size: 1.8rem; font-weight: 800; margin-bottom: 16px; }
.mission-card p { font-size: 1.25rem; line-height: 1.6; font-style: italic; color: #4B5563; }
.prose h2 { color: var(--navy); font-size: 2rem; font-weight: 800; margin-bottom: 20px; }
.prose h2.underlined { border-bottom: 4px solid var(--carolina); display: inline-block; padding-bottom: 8px; }
.prose p { font-size: 1.1rem; line-height: 1.8; color: var(--body); }
.stack { display: grid; gap: 24px; }
.offer-card {
  padding: 24px;
  background-color: var(--white);
  border-radius: 12px;
  border-left: 4px solid var(--carolina);
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.05);
}
.offer-card h3 { font-size: 1.2rem; font-weight: 700; color: var(--navy); margin-bottom: 8px; }
.offer-card p { color: #4B5563; line-height: 1.6; }
.approach { background-color: var(--navy); color: var(--white); padding: 40px; border-radius: 16px; position: relative; overflow: hidden; }
.approach-copy { position: relative; z-index: 2; }
.approach h2 { font-size: 2rem; font-weight: 800; margin-bottom: 20px; }
.approach p { font-size: 1.1rem; line-height: 1.8; color: #E0E7FF; }
.approach .argyle-bg { z-index: 1; }
.checklist { display: grid; gap: 16px; }
.check-row { display: flex; align-items: flex-start; gap: 16px; }
.check-row .icon { flex-shrink: 0; margin-top: 4px; }
.check-row p { font-size: 1.1rem; line-height: 1.6; color: var(--body); margin: 0; }

/* Community */
.feed { max-width: 720px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px; }
.post-card {
  background-color: var(--white);
  border-radius: 16px;
  border: 1px solid var(--light-gray);
  box-shadow: 0 4px 10px rgba(0, 0, 0, 0.03);
  padding: 24px;
}
.post-head { display: flex; align-items: center; gap: 12px; margin-bottom: 16px; }
.avatar {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  background-color: var(--navy);
  color: var(--white);
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
}
.post-author { font-weight: 700; color: var(--navy); }
.post-time { font-size: 0.85rem; color: var(--muted); }
.post-text { font-size: 1.05rem; line-height: 1.6; color: var(--body); margin: 0 0 16px; }
.post-image { height: 240px; border-radius: 12px; margin-bottom: 16px; opacity: 0.85; }
.post-stats { display: flex; gap: 24px; color: var(--muted); font-size: 0.9rem; }
.post-stat { display: inline-flex; align-items: center; gap: 6px; }

/* Contact */
.contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 60px; }
.contact-info { display: flex; flex-direction: column; gap: 32px; }
.info-card {
  padding: 32px;
  background-color: var(--white);
  border-radius: 16px;
  border: 1px solid var(--light-gray);
  box-shadow: 0 4px 10px rgba(0, 0, 0, 0.03);
}
.info-card-head { display: flex; align-items: center; gap: 16px; margin-bottom: 16px; }
.info-card-icon { padding: 12px; background: rgba(123, 175, 212, 0.1); border-radius: 12px; color: var(--carolina); }
.info-card h3 { font-size: 1.25rem; font-weight: 700; color: var(--navy); }
.info-card p { color: #4B5563; font-size: 1.1rem; margin-bottom: 8px; }
.info-card a { font-size: 1.25rem; color: var(--carolina); font-weight: 600; text-decoration: none; }
.faq-card { padding: 32px; background-color: var(--navy); border-radius: 16px; color: white; }
.faq-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 16px; }
.faq-card p { color: #E0E7FF; line-height: 1.6; }
.contact-form-card { background-color: var(--white); padding: 40px; border-radius: 16px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.05); }
.contact-form { display: flex; flex-direction: column; gap: 20px; }
.contact-form .btn-primary { width: 100%; margin-top: 10px; }
.input-field {
  width: 100%;
  padding: 14px 16px;
  border-radius: 8px;
  border: 1px solid var(--light-gray);
  font-family: 'Inter', sans-serif;
  font-size: 1rem;
  transition: all 0.2s;
  outline: none;
}
.input-field:focus { border-color: var(--carolina); box-shadow: 0 0 0 3px rgba(123, 175, 212, 0.2); }
textarea.input-field { resize: vertical; }
.label { display: block; font-size: 0.875rem; font-weight: 600; color: var(--navy); margin-bottom: 6px; }

/* Newsletter & footer */
.newsletter { padding: 100px 0; background-color: var(--carolina); }
.newsletter-card {
  background-color: var(--white);
  border-radius: 24px;
  padding: 40px;
  text-align: center;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
  max-width: 800px;
  margin: 0 auto;
}
.newsletter-card h3 { font-size: 2rem; font-weight: 800; color: var(--navy); margin-bottom: 16px; }
.newsletter-card p { color: var(--muted); margin-bottom: 32px; }
.newsletter-row { display: flex; gap: 12px; flex-wrap: wrap; justify-content: center; }
.newsletter-row input {
  padding: 16px 24px;
  border-radius: 8px;
  border: 2px solid var(--light-gray);
  width: 100%;
  max-width: 350px;
  font-size: 1rem;
  outline: none;
}

.site-footer { background-color: #0F172A; color: #94A3B8; padding: 60px 0 20px; }
.footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 40px; margin-bottom: 60px; }
.footer-grid h4 { color: white; font-size: 1rem; font-weight: 600; margin-bottom: 20px; }
.footer-grid h4.brand { font-size: 1.2rem; font-weight: 700; }
.footer-grid p { font-size: 0.9rem; line-height: 1.6; }
.footer-links { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 12px; }
.footer-links a { text-decoration: none; color: inherit; }
.footer-bottom { border-top: 1px solid #1E293B; padding-top: 20px; display: flex; justify-content: space-between; flex-wrap: wrap; gap: 20px; }
.footer-bottom p { font-size: 0.875rem; }
.socials { display: flex; gap: 20px; }
.social { width: 20px; height: 20px; background-color: #334155; border-radius: 4px; }
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_tag_is_the_only_special_fill() {
        assert_eq!(card_fill("gold"), GOLD);
        assert_eq!(card_fill("Gold"), GOLD);
        assert_eq!(card_fill("blue"), CAROLINA_BLUE);
        assert_eq!(card_fill(""), CAROLINA_BLUE);
    }
}

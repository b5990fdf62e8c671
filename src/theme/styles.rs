//! Global CSS styles for the portfolio page.
//!
//! Card visibility, fade and slide are inline styles computed by the page
//! state; nothing here hides or reveals elements.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0d1117;
  --bg-raised: #161b22;
  --border: #30363d;

  /* Accent */
  --accent: #58a6ff;
  --accent-soft: rgba(88, 166, 255, 0.15);

  /* Text */
  --text-primary: #f0f6fc;
  --text-secondary: rgba(240, 246, 252, 0.7);
  --text-muted: rgba(240, 246, 252, 0.5);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Layout */
  --header-height: 80px;
  --content-width: 1100px;
}

/* === Base === */
* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: auto; }

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

a { color: var(--accent); text-decoration: none; }

/* === Particle Background === */
.particles-bg {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: auto;
}

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 10;
  height: var(--header-height);
  background: rgba(13, 17, 23, 0.92);
  backdrop-filter: blur(8px);
  transition: box-shadow 0.3s ease;
}

.header-inner {
  max-width: var(--content-width);
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.header-title {
  color: var(--text-primary);
  font-size: 1.25rem;
  font-weight: 700;
}

.nav-links { display: flex; gap: 1.5rem; }

.nav-link { color: var(--text-secondary); }
.nav-link:hover { color: var(--accent); }

/* === Page === */
.page {
  position: relative;
  z-index: 1;
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 1.5rem;
}

.hero { padding: 6rem 0 4rem; }
.hero-title { font-size: 3rem; line-height: 1.1; }
.hero-tagline { margin-top: 1rem; font-size: 1.25rem; color: var(--text-secondary); }
.hero-about { margin-top: 1rem; max-width: 40rem; color: var(--text-muted); }

.btn-primary {
  display: inline-block;
  margin-top: 2rem;
  padding: 0.75rem 1.5rem;
  border: 1px solid var(--accent);
  border-radius: 6px;
}
.btn-primary:hover { background: var(--accent-soft); }

.section-title { font-size: 2rem; margin-bottom: 1.5rem; }

.portfolio-section { padding: 4rem 0; }

/* === Filter Bar === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.filter-btn {
  padding: 0.5rem 1.25rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
  transition: all 0.2s ease;
}
.filter-btn:hover { border-color: var(--accent); color: var(--text-primary); }
.filter-btn.active {
  background: var(--accent);
  border-color: var(--accent);
  color: var(--bg);
}

/* === Cards === */
.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.portfolio-card {
  padding: 1.5rem;
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--bg-raised);
}

.card-category {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--accent);
}

.card-title { margin-top: 0.5rem; font-size: 1.25rem; }
.card-description { margin-top: 0.5rem; color: var(--text-secondary); }

.card-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; list-style: none; }
.card-tag {
  padding: 0.125rem 0.5rem;
  border-radius: 4px;
  background: var(--accent-soft);
  font-family: var(--font-mono);
  font-size: 0.75rem;
}

.card-link { display: inline-block; margin-top: 1rem; }

.portfolio-empty { color: var(--text-muted); text-align: center; padding: 2rem 0; }

/* === Contact === */
.contact-section { padding: 4rem 0; }
.contact-links { display: flex; flex-wrap: wrap; gap: 1.5rem; list-style: none; }
.contact-link { font-size: 1.1rem; }

/* === Footer === */
.footer {
  position: relative;
  z-index: 1;
  padding: 2rem 0;
  text-align: center;
  border-top: 1px solid var(--border);
}
.footer-link { color: var(--text-muted); }

/* === Mobile === */
@media (max-width: 640px) {
  .hero-title { font-size: 2.25rem; }
  .portfolio-grid { grid-template-columns: 1fr; }
}
"#;

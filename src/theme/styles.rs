//! Global CSS styles for Love Notes.
//!
//! Soft rose greeting-card look: blush paper cards, handwriting for the
//! notes, hearts drifting up behind everything.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ROSE (Accents, Actions) */
  --rose-50: #fff1f2;
  --rose-100: #ffe4e6;
  --rose-200: #fecdd3;
  --rose-300: #fda4af;
  --rose-400: #fb7185;
  --rose-500: #f43f5e;
  --rose-600: #e11d48;
  --rose-700: #be123c;
  --rose-900: #881337;

  /* PINK (Backdrop, Tape) */
  --pink-50: #fdf2f8;
  --pink-100: #fce7f3;

  /* Typography */
  --font-hand: 'Caveat', 'Patrick Hand', cursive, ui-sans-serif, system-ui;
  --font-ui: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Shape */
  --card-radius: 22px;
  --control-radius: 0.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --spring: cubic-bezier(0.22, 1.2, 0.36, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-ui);
  color: var(--rose-900);
  background: white;
}

.app-root {
  position: relative;
  height: 100vh;
  width: 100%;
  overflow: hidden;
}

.handwriting {
  font-family: var(--font-hand);
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
  flex-shrink: 0;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

.w-full { width: 100%; }
.flex-1 { flex: 1 1 0%; }

/* === Screen Layout === */
.screen {
  position: relative;
  z-index: 10;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  align-items: stretch;
  height: 100vh;
  max-width: 24rem;
  padding: 0 1rem 1.5rem;
  overflow: hidden;
}

.screen-center {
  flex: 1;
  display: grid;
  place-items: center;
}

/* === Heart Background === */
.heart-layer {
  position: fixed;
  inset: 0;
  overflow: hidden;
  z-index: 0;
  pointer-events: none;
  user-select: none;
}

.heart-backdrop {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, var(--rose-50), var(--pink-50), white);
}

.heart {
  position: absolute;
  top: 0;
  opacity: 0.4;
  animation-name: heart-rise;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
  animation-fill-mode: both;
  will-change: transform;
}

@keyframes heart-rise {
  from {
    transform: translate(0, var(--start-y)) scale(var(--scale)) rotate(0deg);
  }
  to {
    transform: translate(var(--drift), var(--end-y)) scale(var(--scale)) rotate(var(--end-rot));
  }
}

.heart-fade {
  position: absolute;
  left: 0;
  right: 0;
  height: 6rem;
}

.heart-fade-top {
  top: 0;
  background: linear-gradient(to bottom, rgba(255, 255, 255, 0.6), transparent);
}

.heart-fade-bottom {
  bottom: 0;
  background: linear-gradient(to top, rgba(255, 255, 255, 0.6), transparent);
}

/* === Card === */
.card-shell {
  position: relative;
  border-radius: var(--card-radius);
  border: 1px solid rgba(255, 228, 230, 0.7);
  background: radial-gradient(120% 80% at 50% 0%, #fff 0%, #fff7f9 60%, #fff0f3 100%);
  box-shadow: 0 10px 30px rgba(244, 63, 94, 0.10), 0 4px 10px rgba(0, 0, 0, 0.05);
}

.card-ring,
.card-highlight {
  position: absolute;
  inset: 0;
  border-radius: var(--card-radius);
  pointer-events: none;
}

.card-ring {
  box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.6);
}

.card-highlight {
  box-shadow: inset 0 1px 0 rgba(255, 255, 255, 0.6);
}

.card-tape {
  position: absolute;
  top: -0.75rem;
  left: 50%;
  transform: translateX(-50%) rotate(-3deg);
  height: 1.5rem;
  width: 7rem;
  border-radius: 2px;
  opacity: 0.8;
  background: repeating-linear-gradient(45deg, var(--pink-100) 0 6px, var(--rose-100) 6px 12px);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.card-body {
  position: relative;
  padding: 1.5rem;
  overflow: hidden;
  border-radius: var(--card-radius);
}

.card-body::before {
  content: "";
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: repeating-linear-gradient(0deg, transparent 0, transparent 26px, rgba(244, 114, 182, 0.08) 27px);
}

@media (min-width: 640px) {
  .card-body { padding: 1.75rem; }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--control-radius);
  font-family: var(--font-ui);
  font-weight: 500;
  cursor: pointer;
  border: 1px solid transparent;
  background: transparent;
  transition: background-color var(--transition-fast), color var(--transition-fast);
}

.btn:focus-visible {
  outline: none;
  box-shadow: 0 0 0 2px white, 0 0 0 4px var(--rose-400);
}

.btn:disabled {
  opacity: 0.5;
  pointer-events: none;
}

.btn-solid { background: var(--rose-500); color: white; }
.btn-solid:hover { background: var(--rose-600); }

.btn-outline { border-color: var(--rose-300); color: var(--rose-600); }
.btn-outline:hover { background: var(--rose-50); }

.btn-ghost { color: var(--rose-500); }
.btn-ghost:hover { background: var(--rose-50); }

.btn-sm { padding: 0.375rem 0.625rem; font-size: 0.875rem; }
.btn-md { padding: 0.5rem 1rem; font-size: 1rem; }
.btn-lg { padding: 0.75rem 1.25rem; font-size: 1.125rem; }
.btn-icon { padding: 0.5rem; height: 2.5rem; width: 2.5rem; }

/* === Password Gate === */
.gate-card { width: 100%; }

.gate-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.gate-caption {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  color: var(--rose-500);
}

.gate-title {
  margin-bottom: 1rem;
  font-size: 1.5rem;
  font-weight: 400;
  color: var(--rose-700);
}

.gate-form {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.gate-error {
  font-size: 0.875rem;
  color: var(--rose-500);
}

.secret-input {
  display: flex;
  border-radius: var(--control-radius);
  border: 1px solid var(--rose-200);
  background: white;
  padding: 0.5rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  color: var(--rose-500);
}

.secret-input-field {
  flex: 1;
  min-width: 0;
  background: transparent;
  border: none;
  outline: none;
  padding: 0.5rem 0.75rem;
  font-size: 1rem;
  color: var(--rose-900);
}

.secret-input-field.masked { letter-spacing: 0.15em; }

.secret-input-toggle {
  padding: 0 0.5rem;
  border: none;
  background: transparent;
  color: var(--rose-400);
  cursor: pointer;
}

/* === Viewer === */
.viewer-header {
  position: sticky;
  top: 0;
  z-index: 20;
  margin: 0 -1rem 0.75rem;
  padding: 0.75rem 1rem;
  background: rgba(255, 255, 255, 0.6);
  backdrop-filter: blur(8px);
}

.viewer-header-inner {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.sparkle-badge {
  display: grid;
  place-items: center;
  height: 2rem;
  width: 2rem;
  border-radius: var(--control-radius);
  background: var(--rose-100);
  color: var(--rose-500);
}

.viewer-heading { line-height: 1.25; }

.viewer-kicker {
  font-size: 0.75rem;
  color: var(--rose-500);
}

.viewer-title {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--rose-500);
}

.note-stage {
  display: grid;
  width: 100%;
}

/* Outgoing and incoming cards share one cell and overlap */
.note-stage > .note-card { grid-area: 1 / 1; }

.note-card { width: 100%; }

.note-card.exit-to-above,
.note-card.exit-to-below {
  pointer-events: none;
  z-index: 1;
}

.note-text {
  white-space: pre-line;
  text-wrap: balance;
  font-size: 22px;
  line-height: 1.55;
  color: var(--rose-900);
}

.viewer-controls {
  margin-top: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.viewer-buttons {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
  margin-bottom: 2.5rem;
}

.progress-dots {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.375rem;
}

.progress-dot {
  height: 0.375rem;
  width: 0.5rem;
  border-radius: 9999px;
  background: var(--rose-200);
  transition: all 300ms ease;
}

.progress-dot.reached {
  width: 1.25rem;
  background: var(--rose-400);
}

/* === Motion === */
.rise-in { animation: rise-in 450ms var(--spring) both; }
.enter-from-below { animation: enter-from-below 380ms var(--spring) both; }
.enter-from-above { animation: enter-from-above 380ms var(--spring) both; }
.exit-to-above { animation: exit-to-above 280ms ease-in forwards; }
.exit-to-below { animation: exit-to-below 280ms ease-in forwards; }

@keyframes rise-in {
  from { transform: translateY(20px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes enter-from-below {
  from { transform: translateY(30px) rotate(-0.7deg); opacity: 0; }
  to { transform: translateY(0) rotate(0deg); opacity: 1; }
}

@keyframes enter-from-above {
  from { transform: translateY(-30px) rotate(0.7deg); opacity: 0; }
  to { transform: translateY(0) rotate(0deg); opacity: 1; }
}

@keyframes exit-to-above {
  from { transform: translateY(0) rotate(0deg); opacity: 1; }
  to { transform: translateY(-30px) rotate(0.7deg); opacity: 0; }
}

@keyframes exit-to-below {
  from { transform: translateY(0) rotate(0deg); opacity: 1; }
  to { transform: translateY(30px) rotate(-0.7deg); opacity: 0; }
}

@media (prefers-reduced-motion: reduce) {
  .heart, .rise-in, .enter-from-below, .enter-from-above { animation: none; }
  .exit-to-above, .exit-to-below { display: none; }
}
"#;

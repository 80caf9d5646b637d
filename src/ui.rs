use crate::models::ViewMode;

pub fn render_index(date_label: &str, view: ViewMode) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date_label)
        .replace("{{VIEW}}", view.as_tag())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>30-Day Progress Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Lora:wght@600&display=swap');

    :root {
      --bg-1: #eef4ee;
      --bg-2: #cfe3cf;
      --ink: #22302a;
      --accent: #2f7d52;
      --accent-soft: #e4f2e9;
      --slate: #40566b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 22px 54px rgba(47, 88, 66, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #f4f8ef 65%, #eef3ec 100%);
      color: var(--ink);
      font-family: "Inter", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(10px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 500ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 8px;
    }

    h1 {
      font-family: "Lora", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.7rem, 3.5vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6b60;
      font-size: 0.98rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(64, 86, 107, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tabs form {
      display: contents;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 9px 16px;
      font-size: 0.92rem;
      font-weight: 600;
      color: #5f6d62;
      cursor: pointer;
      transition: background 150ms ease, color 150ms ease;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 18px rgba(47, 125, 82, 0.16);
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 22px;
      border: 1px solid rgba(47, 125, 82, 0.1);
      display: grid;
      gap: 14px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.25rem;
    }

    .banner {
      margin: 0;
      text-align: center;
      color: #6b7a6e;
      padding: 18px 0;
    }

    .task {
      display: grid;
      gap: 8px;
    }

    .task h3 {
      margin: 0;
      font-size: 1rem;
      font-weight: 600;
    }

    .task-btn {
      appearance: none;
      border: 1px solid rgba(47, 125, 82, 0.35);
      border-radius: 12px;
      padding: 12px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      text-align: left;
      background: white;
      color: var(--slate);
      cursor: pointer;
      transition: transform 120ms ease, background 150ms ease, color 150ms ease;
    }

    .task-btn:active {
      transform: scale(0.985);
    }

    .task-btn.done {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    textarea.notes {
      width: 100%;
      min-height: 84px;
      resize: vertical;
      border: 1px solid rgba(64, 86, 107, 0.25);
      border-radius: 12px;
      padding: 10px 12px;
      font-family: inherit;
      font-size: 0.93rem;
      color: var(--ink);
      background: var(--accent-soft);
    }

    textarea.notes:focus {
      outline: 2px solid rgba(47, 125, 82, 0.45);
    }

    .goal {
      display: grid;
      gap: 2px;
    }

    .goal .title {
      margin: 0;
      font-weight: 600;
    }

    .goal .detail {
      margin: 0;
      color: #5c6b60;
      font-size: 0.9rem;
    }

    .quick-list {
      margin: 0;
      padding-left: 18px;
      color: var(--slate);
    }

    .day-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
      gap: 16px;
    }

    .status {
      font-size: 0.92rem;
      color: #67756a;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #b4402e;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(16px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 620px) {
      .app {
        padding: 24px 18px;
      }
      .tabs {
        width: 100%;
        justify-content: center;
      }
    }
  </style>
</head>
<body data-view="{{VIEW}}">
  <main class="app">
    <header>
      <h1>30-Day Progress Tracker</h1>
      <p class="subtitle">Today: {{DATE}}</p>
    </header>

    <nav class="tabs" aria-label="Views">
      <form method="post" action="/view/today">
        <button class="tab" data-tab="today" type="submit">Today’s Plan</button>
      </form>
      <form method="post" action="/view/weekly">
        <button class="tab" data-tab="weekly" type="submit">Weekly Goals</button>
      </form>
      <form method="post" action="/view/adjust">
        <button class="tab" data-tab="adjust" type="submit">Adjust Plan</button>
      </form>
    </nav>

    <section id="view-root">
      <p class="banner">Loading plan...</p>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const viewRoot = document.getElementById('view-root');
    const statusEl = document.getElementById('status');
    const tabForms = Array.from(document.querySelectorAll('.tabs form'));
    const tabButtons = Array.from(document.querySelectorAll('.tab'));

    let planData = null;
    let activeView = document.body.dataset.view || 'today';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      }[ch]));

    const taskButtons = (day) =>
      planData.tasks
        .map((task, j) => {
          const done = day.completed[j];
          return `
            <button class="task-btn${done ? ' done' : ''}" type="button"
              data-day="${day.index}" data-task="${j}">
              ${done ? '✅' : '⬜️'} ${escapeHtml(task.label)}
            </button>`;
        })
        .join('');

    const goalList = () =>
      planData.goals
        .map(
          (goal) => `
            <div class="goal">
              <p class="title">${escapeHtml(goal.title)}</p>
              <p class="detail">${escapeHtml(goal.description)}</p>
            </div>`
        )
        .join('');

    const notesBox = (day, placeholder) => `
      <textarea class="notes" data-day="${day.index}"
        placeholder="${placeholder}">${escapeHtml(day.notes)}</textarea>`;

    const renderToday = () => {
      const index = planData.today_index;
      if (index < 0 || index >= planData.days.length) {
        viewRoot.innerHTML = `
          <div class="card">
            <p class="banner">Today is outside your 30-day plan (starts ${planData.days[0].label}).</p>
          </div>`;
        return;
      }
      const day = planData.days[index];
      viewRoot.innerHTML = `
        <div class="card">
          <h2>Today’s Plan (${day.label})</h2>
          ${planData.tasks
            .map(
              (task, j) => `
                <div class="task">
                  <h3>${escapeHtml(task.label)}</h3>
                  <button class="task-btn${day.completed[j] ? ' done' : ''}" type="button"
                    data-day="${day.index}" data-task="${j}">
                    ${day.completed[j] ? '✅ Done' : '⬜️ Mark as done'}
                  </button>
                </div>`
            )
            .join('')}
          ${notesBox(day, 'Notes for the day')}
          <h2>Weekly Goals</h2>
          ${goalList()}
        </div>`;
    };

    const renderWeekly = () => {
      viewRoot.innerHTML = `
        <div class="card">
          <h2>Weekly Overview</h2>
          ${goalList()}
          <h2>Today’s Quick View</h2>
          <ul class="quick-list">
            ${planData.tasks.map((task) => `<li>${escapeHtml(task.label)}</li>`).join('')}
          </ul>
        </div>`;
    };

    const renderAdjust = () => {
      viewRoot.innerHTML = `
        <div class="day-grid">
          ${planData.days
            .map(
              (day) => `
                <article class="card">
                  <h2>${day.label}</h2>
                  ${taskButtons(day)}
                  ${notesBox(day, 'Reflection / Adjustments / Notes')}
                </article>`
            )
            .join('')}
        </div>`;
    };

    const renderActiveView = () => {
      if (!planData) {
        return;
      }
      if (activeView === 'weekly') {
        renderWeekly();
      } else if (activeView === 'adjust') {
        renderAdjust();
      } else {
        renderToday();
      }
    };

    const setActiveView = (tag, announce) => {
      activeView = tag;
      tabButtons.forEach((button) => {
        button.classList.toggle('active', button.dataset.tab === tag);
      });
      renderActiveView();
      if (announce) {
        fetch('/api/view', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ view: tag })
        }).catch((err) => setStatus(err.message, 'error'));
      }
    };

    const loadPlan = async () => {
      const res = await fetch('/api/plan');
      if (!res.ok) {
        throw new Error('Unable to load plan');
      }
      planData = await res.json();
      renderActiveView();
    };

    const toggleTask = async (day, task) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ day, task })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      const updated = await res.json();
      planData.days[updated.index] = updated;
      renderActiveView();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const saveNotes = async (day, notes) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/notes', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ day, notes })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      planData.days[day] = await res.json();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    viewRoot.addEventListener('click', (event) => {
      const button = event.target.closest('.task-btn');
      if (!button) {
        return;
      }
      toggleTask(Number(button.dataset.day), Number(button.dataset.task)).catch((err) =>
        setStatus(err.message, 'error')
      );
    });

    viewRoot.addEventListener('change', (event) => {
      const box = event.target.closest('textarea.notes');
      if (!box) {
        return;
      }
      saveNotes(Number(box.dataset.day), box.value).catch((err) =>
        setStatus(err.message, 'error')
      );
    });

    tabForms.forEach((form) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        setActiveView(form.querySelector('.tab').dataset.tab, true);
      });
    });

    setActiveView(activeView, false);
    loadPlan().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index_substitutes_placeholders() {
        let page = render_index("Jul 5", ViewMode::Adjust);
        assert!(page.contains("Today: Jul 5"));
        assert!(page.contains(r#"data-view="adjust""#));
        assert!(!page.contains("{{DATE}}"));
        assert!(!page.contains("{{VIEW}}"));
    }
}

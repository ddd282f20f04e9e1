pub fn render_index(today_key: &str) -> String {
    INDEX_HTML.replace("{{TODAY_KEY}}", today_key)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #111418;
      --card: rgba(36, 41, 48, 0.8);
      --cell: #2f353d;
      --cell-hover: #3b424c;
      --marked: #10b981;
      --ink: #f3f4f6;
      --muted: #9ca3af;
      --danger: #dc2626;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #1f2329, var(--bg) 60%, #000);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    header {
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: clamp(2.2rem, 5vw, 3.2rem);
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .habit {
      background: var(--card);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 12px;
    }

    .habit-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .habit-head h2 {
      margin: 0;
      font-size: 1.25rem;
      cursor: pointer;
    }

    .meta {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .actions {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    button, select, input {
      font: inherit;
      border-radius: 999px;
      border: none;
      padding: 8px 14px;
    }

    button {
      cursor: pointer;
      background: var(--cell);
      color: var(--ink);
    }

    button.check.done {
      background: var(--marked);
    }

    button.delete {
      background: var(--danger);
    }

    .grid-scroll {
      overflow-x: auto;
    }

    .grid {
      display: grid;
      grid-template-rows: repeat(7, 32px);
      grid-auto-flow: column;
      grid-auto-columns: 32px;
      gap: 4px;
      min-width: max-content;
    }

    .cell {
      border-radius: 6px;
      background: var(--cell);
      color: #d1d5db;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      font-size: 9px;
      cursor: pointer;
      user-select: none;
    }

    .cell:hover {
      background: var(--cell-hover);
    }

    .cell.marked {
      background: var(--marked);
      color: white;
    }

    .cell.today {
      outline: 2px solid var(--marked);
    }

    .cell .day {
      font-size: 10px;
    }

    form.create {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    form.create input {
      flex: 1;
      min-width: 200px;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #f87171;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">One day at a time. Today is <span id="today-key">{{TODAY_KEY}}</span>.</p>
    </header>

    <form class="create" id="create-habit">
      <input id="habit-title" placeholder="New habit" autocomplete="off" />
      <select id="habit-category"></select>
      <button type="submit">Create</button>
    </form>

    <form class="create" id="create-category">
      <input id="category-name" placeholder="New category" autocomplete="off" />
      <button type="submit">Add category</button>
    </form>

    <div class="status" id="status"></div>
    <section id="habits"></section>
  </main>

  <script>
    const MONTHS = ['JAN', 'FEB', 'MAR', 'APR', 'MAY', 'JUN', 'JUL', 'AUG', 'SEP', 'OCT', 'NOV', 'DEC'];
    const todayKey = document.getElementById('today-key').textContent;
    const habitsEl = document.getElementById('habits');
    const statusEl = document.getElementById('status');
    const categorySelect = document.getElementById('habit-category');

    let grid = null;
    let categories = [];

    const escapeHtml = (text) => text.replace(/[&<>"']/g, (ch) => `&#${ch.charCodeAt(0)};`);

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (method, path, body) => {
      const res = await fetch(path, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    // Lanes hold every 7th day; interleave them back into chronological order.
    const chronological = (lanes) => {
      const days = [];
      const columns = Math.max(0, ...lanes.map((lane) => lane.length));
      for (let col = 0; col < columns; col += 1) {
        lanes.forEach((lane) => {
          if (col < lane.length) {
            days.push(lane[col]);
          }
        });
      }
      return days;
    };

    const renderCategories = () => {
      categorySelect.innerHTML = '<option value="">No category</option>' + categories
        .map((category) => `<option value="${category.id}">${escapeHtml(category.name)}</option>`)
        .join('');
    };

    const renderHabit = (habit, days) => {
      const card = document.createElement('article');
      card.className = 'habit';
      const marked = new Set(habit.marked_days);
      const category = habit.category_name ? ` · ${escapeHtml(habit.category_name)}` : '';

      card.innerHTML = `
        <div class="habit-head">
          <div>
            <h2 title="Click to rename"></h2>
            <span class="meta">Streak: ${habit.streak} day${habit.streak === 1 ? '' : 's'}${category}</span>
          </div>
          <div class="actions">
            <button class="delete" type="button">Delete</button>
            <button class="check ${habit.marked_today ? 'done' : ''}" type="button">&#10003;</button>
          </div>
        </div>
        <div class="grid-scroll"><div class="grid"></div></div>`;
      card.querySelector('h2').textContent = habit.title;

      const gridEl = card.querySelector('.grid');
      days.forEach((key) => {
        const cell = document.createElement('div');
        cell.className = 'cell' + (marked.has(key) ? ' marked' : '') + (key === todayKey ? ' today' : '');
        cell.innerHTML = `<span>${MONTHS[Number(key.slice(0, 2)) - 1]}</span><span class="day">${key.slice(3, 5)}</span>`;
        cell.addEventListener('click', () => run(api('POST', `/api/habits/${habit.id}/toggle`, { date_key: key })));
        gridEl.appendChild(cell);
      });

      card.querySelector('.check').addEventListener('click', () => run(api('POST', `/api/habits/${habit.id}/today`)));
      card.querySelector('.delete').addEventListener('click', () => {
        if (confirm(`Delete "${habit.title}"?`)) {
          run(api('DELETE', `/api/habits/${habit.id}`));
        }
      });
      card.querySelector('h2').addEventListener('click', () => {
        const title = prompt('Rename habit', habit.title);
        if (title !== null) {
          run(api('PATCH', `/api/habits/${habit.id}`, { title }));
        }
      });
      return card;
    };

    const refresh = async () => {
      const [gridData, habits, categoryList] = await Promise.all([
        api('GET', '/api/grid'),
        api('GET', '/api/habits'),
        api('GET', '/api/categories')
      ]);
      grid = gridData;
      categories = categoryList;
      renderCategories();

      const days = chronological(grid.lanes);
      habitsEl.replaceChildren(...habits.map((habit) => renderHabit(habit, days)));
      if (!habits.length) {
        habitsEl.innerHTML = '<p class="subtitle">No habits yet. Create one above.</p>';
      }
    };

    const run = (promise) => {
      promise
        .then(refresh)
        .then(() => setStatus('', ''))
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('create-habit').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('habit-title');
      const categoryId = categorySelect.value ? Number(categorySelect.value) : null;
      run(api('POST', '/api/habits', { title: input.value, category_id: categoryId }).then(() => {
        input.value = '';
      }));
    });

    document.getElementById('create-category').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('category-name');
      run(api('POST', '/api/categories', { name: input.value }).then(() => {
        input.value = '';
      }));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_today_key() {
        let html = render_index("03010-24");
        assert!(html.contains(r#"<span id="today-key">03010-24</span>"#));
        assert!(!html.contains("{{TODAY_KEY}}"));
    }
}

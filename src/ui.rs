use crate::models::Nutrients;

const MAX_CALORIES: f64 = 2500.0;
const WARN_CALORIES: f64 = 2200.0;

pub fn render_index(date: &str, totals: &Nutrients) -> String {
    let percentage = ((totals.calories / MAX_CALORIES) * 100.0).min(100.0);
    let bar_color = if totals.calories >= WARN_CALORIES {
        "orange"
    } else {
        "green"
    };

    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{CALORIES}}", &format!("{:.0}", totals.calories))
        .replace("{{FAT}}", &format!("{:.1}", totals.fat))
        .replace("{{CARBS}}", &format!("{:.1}", totals.carbs))
        .replace("{{SUGAR}}", &format!("{:.1}", totals.sugar))
        .replace("{{PROTEIN}}", &format!("{:.1}", totals.protein))
        .replace("{{PROGRESS}}", &format!("{percentage:.0}"))
        .replace("{{BAR_COLOR}}", bar_color)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Suivi nutritionnel</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f7ee;
      --bg-2: #d9ecc6;
      --ink: #26302a;
      --accent: #3f9d57;
      --accent-2: #2f4858;
      --warn: #e88f2a;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f2dc 60%, #f3f6ec 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5c665e;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #84907f;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .progress-track {
      background: rgba(47, 72, 88, 0.12);
      border-radius: 999px;
      height: 16px;
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      transition: width 250ms ease, background-color 250ms ease;
    }

    .progress-caption {
      font-size: 0.9rem;
      color: #5c665e;
    }

    .foods {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(170px, 1fr));
      gap: 12px;
    }

    .food-item {
      background: white;
      border-radius: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 10px;
      display: grid;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 14px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .food {
      background: var(--accent);
      color: white;
      box-shadow: 0 8px 18px rgba(63, 157, 87, 0.3);
    }

    .info-btn {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      font-size: 0.8rem;
      padding: 6px 10px;
    }

    .nutrition-info {
      font-size: 0.85rem;
      color: #53605a;
      border-top: 1px dashed rgba(47, 72, 88, 0.15);
      padding-top: 6px;
    }

    .nutrition-info p {
      margin: 2px 0;
    }

    .summary-list {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      min-height: 2.4em;
    }

    .summary-btn {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 8px 18px rgba(47, 72, 88, 0.25);
    }

    .summary-hint {
      margin: 6px 0 0;
      color: #6f7a70;
      font-size: 0.85rem;
    }

    .history table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 16px;
      overflow: hidden;
    }

    .history th,
    .history td {
      text-align: left;
      padding: 10px 14px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
      font-size: 0.95rem;
    }

    .history th {
      background: rgba(47, 72, 88, 0.06);
      text-transform: uppercase;
      letter-spacing: 0.1em;
      font-size: 0.78rem;
      color: #5c665e;
    }

    .history-actions {
      margin-top: 14px;
    }

    .btn-rollover {
      background: var(--warn);
      color: white;
      box-shadow: 0 8px 18px rgba(232, 143, 42, 0.3);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="warn"] {
      color: #b06a12;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Suivi nutritionnel</h1>
      <p id="date" class="subtitle">{{DATE}}</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Calories</span>
        <span id="calories" class="value">{{CALORIES}}</span>
      </div>
      <div class="stat">
        <span class="label">Mati&egrave;res grasses (g)</span>
        <span id="fat" class="value">{{FAT}}</span>
      </div>
      <div class="stat">
        <span class="label">Glucides (g)</span>
        <span id="carbs" class="value">{{CARBS}}</span>
      </div>
      <div class="stat">
        <span class="label">Sucres (g)</span>
        <span id="sugar" class="value">{{SUGAR}}</span>
      </div>
      <div class="stat">
        <span class="label">Prot&eacute;ines (g)</span>
        <span id="protein" class="value">{{PROTEIN}}</span>
      </div>
    </section>

    <section>
      <div class="progress-track">
        <div id="calorie-progress-bar" class="progress-fill"
             style="width: {{PROGRESS}}%; background-color: {{BAR_COLOR}};"></div>
      </div>
      <p class="progress-caption"><span id="calorie-current">{{CALORIES}}</span> / 2500 kcal</p>
    </section>

    <section>
      <h2>Aliments</h2>
      <div class="foods" id="food-list">
        <button class="food" data-name="Pomme" data-calories="95" data-fat="0.3" data-carbs="25" data-sugar="19" data-protein="0.5">Pomme</button>
        <button class="food" data-name="Banane" data-calories="105" data-fat="0.4" data-carbs="27" data-sugar="14" data-protein="1.3">Banane</button>
        <button class="food" data-name="Oeuf dur" data-calories="78" data-fat="5.3" data-carbs="0.6" data-sugar="0.6" data-protein="6.3">Oeuf dur</button>
        <button class="food" data-name="Poulet grill&eacute;" data-calories="165" data-fat="3.6" data-carbs="0" data-sugar="0" data-protein="31">Poulet grill&eacute;</button>
        <button class="food" data-name="Bol de riz" data-calories="206" data-fat="0.4" data-carbs="45" data-sugar="0.1" data-protein="4.3">Bol de riz</button>
        <button class="food" data-name="Yaourt nature" data-calories="61" data-fat="3.3" data-carbs="4.7" data-sugar="4.7" data-protein="3.5">Yaourt nature</button>
        <button class="food" data-name="Amandes (30 g)" data-calories="173" data-fat="15" data-carbs="6.1" data-sugar="1.2" data-protein="6.3">Amandes (30 g)</button>
        <button class="food" data-name="Tranche de pain" data-calories="79" data-fat="1" data-carbs="15" data-sugar="1.6" data-protein="2.7">Tranche de pain</button>
        <button class="food" data-name="Saumon" data-calories="208" data-fat="13" data-carbs="0" data-sugar="0" data-protein="20">Saumon</button>
        <button class="food" data-name="Chocolat noir" data-calories="60" data-fat="4.3" data-carbs="4.6" data-sugar="3.4" data-protein="0.8">Chocolat noir</button>
      </div>
    </section>

    <section>
      <h2>R&eacute;sum&eacute; du jour</h2>
      <div class="summary-list" id="summary-list"></div>
      <p class="summary-hint">Cliquez sur un aliment du r&eacute;sum&eacute; pour le retirer.</p>
    </section>

    <section class="history">
      <h2>Historique des calories</h2>
      <table>
        <thead>
          <tr><th>Date</th><th>Calories</th></tr>
        </thead>
        <tbody id="stats-list"></tbody>
      </table>
      <div class="history-actions">
        <button class="btn-rollover" id="rollover-btn" type="button">Cl&ocirc;turer la journ&eacute;e</button>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const elements = {
      date: document.getElementById('date'),
      calories: document.getElementById('calories'),
      fat: document.getElementById('fat'),
      carbs: document.getElementById('carbs'),
      sugar: document.getElementById('sugar'),
      protein: document.getElementById('protein'),
      summaryList: document.getElementById('summary-list'),
      progressBar: document.getElementById('calorie-progress-bar'),
      calorieCurrent: document.getElementById('calorie-current'),
      statsList: document.getElementById('stats-list'),
      status: document.getElementById('status')
    };

    const maxCalories = 2500;
    const warnCalories = 2200;

    const setStatus = (message, type) => {
      elements.status.textContent = message;
      elements.status.dataset.type = type || '';
    };

    const updateTotalsUI = (totals) => {
      elements.calories.textContent = totals.calories.toFixed(0);
      elements.fat.textContent = totals.fat.toFixed(1);
      elements.carbs.textContent = totals.carbs.toFixed(1);
      elements.sugar.textContent = totals.sugar.toFixed(1);
      elements.protein.textContent = totals.protein.toFixed(1);

      const percentage = Math.min((totals.calories / maxCalories) * 100, 100);
      elements.progressBar.style.width = percentage + '%';
      elements.progressBar.style.backgroundColor = totals.calories >= warnCalories ? 'orange' : 'green';
      elements.calorieCurrent.textContent = totals.calories.toFixed(0);
    };

    const updateSummaryUI = (foods) => {
      elements.summaryList.innerHTML = '';
      foods.forEach(({ name, count }) => {
        const btn = document.createElement('button');
        btn.textContent = name + ', ' + count + 'x';
        btn.classList.add('summary-btn');
        btn.addEventListener('click', () => {
          removeFood(name).catch((err) => setStatus(err.message, 'error'));
        });
        elements.summaryList.appendChild(btn);
      });
    };

    const updateHistoryUI = (entries) => {
      elements.statsList.innerHTML = '';
      entries.forEach((entry) => {
        const row = document.createElement('tr');
        const dateCell = document.createElement('td');
        dateCell.textContent = entry.date;
        const calorieCell = document.createElement('td');
        calorieCell.textContent = entry.calories.toFixed(0);
        row.appendChild(dateCell);
        row.appendChild(calorieCell);
        elements.statsList.appendChild(row);
      });
    };

    const applySession = (session) => {
      elements.date.textContent = session.date;
      updateTotalsUI(session.totals);
      updateSummaryUI(session.foods);
      if (session.warning) {
        setStatus(session.warning, 'warn');
      }
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'La requête a échoué');
      }
      return res.json();
    };

    const loadSession = async () => {
      const res = await fetch('/api/session');
      if (!res.ok) {
        throw new Error('Impossible de charger la session');
      }
      applySession(await res.json());
    };

    const loadHistory = async () => {
      const res = await fetch('/api/history');
      if (!res.ok) {
        throw new Error("Impossible de charger l'historique");
      }
      const history = await res.json();
      updateHistoryUI(history.entries);
    };

    const selectFood = async (dataset) => {
      setStatus('Enregistrement...', '');
      const session = await postJson('/api/food', {
        name: dataset.name,
        calories: parseFloat(dataset.calories),
        fat: parseFloat(dataset.fat),
        carbs: parseFloat(dataset.carbs),
        sugar: parseFloat(dataset.sugar),
        protein: parseFloat(dataset.protein)
      });
      applySession(session);
      if (!session.warning) {
        setStatus('Enregistré', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      }
    };

    const removeFood = async (name) => {
      const session = await postJson('/api/food/remove', { name });
      applySession(session);
    };

    const rollover = async () => {
      await postJson('/api/rollover', {});
      await loadHistory();
      setStatus('Journée clôturée', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    document.querySelectorAll('.food').forEach((foodEl) => {
      foodEl.addEventListener('click', () => {
        selectFood(foodEl.dataset).catch((err) => setStatus(err.message, 'error'));
      });

      const wrapper = document.createElement('div');
      wrapper.className = 'food-item';
      foodEl.parentNode.insertBefore(wrapper, foodEl);
      wrapper.appendChild(foodEl);

      const infoButton = document.createElement('button');
      infoButton.className = 'info-btn';
      infoButton.type = 'button';
      infoButton.textContent = 'Info';
      wrapper.appendChild(infoButton);

      const infoBox = document.createElement('div');
      infoBox.className = 'nutrition-info';
      infoBox.style.display = 'none';

      const fields = [
        { key: 'calories', label: 'Calories', unit: 'kcal' },
        { key: 'fat', label: 'Matières grasses', unit: 'g' },
        { key: 'carbs', label: 'Glucides', unit: 'g' },
        { key: 'sugar', label: 'Sucres', unit: 'g' },
        { key: 'protein', label: 'Protéines', unit: 'g' }
      ];

      fields.forEach(({ key, label, unit }) => {
        const value = foodEl.dataset[key];
        if (value !== undefined) {
          const p = document.createElement('p');
          p.textContent = label + ': ' + value + ' ' + unit;
          infoBox.appendChild(p);
        }
      });

      wrapper.appendChild(infoBox);

      infoButton.addEventListener('click', () => {
        infoBox.style.display = infoBox.style.display === 'block' ? 'none' : 'block';
      });
    });

    document.getElementById('rollover-btn').addEventListener('click', () => {
      rollover().catch((err) => setStatus(err.message, 'error'));
    });

    Promise.all([loadSession(), loadHistory()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index_fills_totals_and_progress() {
        let totals = Nutrients {
            calories: 1250.0,
            fat: 40.5,
            carbs: 130.0,
            sugar: 52.4,
            protein: 80.1,
        };

        let page = render_index("Mardi 12 mars", &totals);
        assert!(page.contains("Mardi 12 mars"));
        assert!(page.contains(">1250<"));
        assert!(page.contains("width: 50%"));
        assert!(page.contains("background-color: green"));
    }

    #[test]
    fn render_index_turns_the_bar_orange_near_the_budget() {
        let totals = Nutrients {
            calories: 2300.0,
            ..Nutrients::default()
        };

        let page = render_index("Mercredi 13 mars", &totals);
        assert!(page.contains("background-color: orange"));
        assert!(page.contains("width: 92%"));
    }
}

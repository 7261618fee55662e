//! Compiled-in validator registry.
//!
//! Each entry is a trusted snippet appended after a submission's assembled
//! program; the pair (task id, language) selects it. Tasks without an entry
//! run the submission alone.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::Language;

static VALIDATORS: LazyLock<HashMap<(u32, Language), &'static str>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    // Task 1: labelled plot
    table.insert(
        (1, Language::Python),
        r#"
import matplotlib.pyplot as plt
import sys
# Check if figure was created and has labels
assert len(plt.get_fignums()) > 0, 'No plot detected'
ax = plt.gca()
assert ax.get_xlabel() != '', 'X-axis label is missing'
assert ax.get_ylabel() != '', 'Y-axis label is missing'
"#,
    );
    table.insert(
        (1, Language::Octave),
        r#"
if isempty(findall(0,'Type','figure')), error('No plot detected'); end
if isempty(get(gca, 'XLabel')), error('Missing XLabel'); end
if isempty(get(gca, 'YLabel')), error('Missing YLabel'); end
"#,
    );

    // Task 2: tabular data with a numeric score column
    table.insert(
        (2, Language::Python),
        r#"
import pandas as pd
assert isinstance(df, pd.DataFrame), 'Variable df must be a DataFrame'
assert df.shape[0] == 3, 'Table should have 3 rows'
assert pd.api.types.is_numeric_dtype(df['SCORE']), 'Score column must be numeric'
"#,
    );
    table.insert(
        (2, Language::Octave),
        r#"
assert(isstruct(T), 'T must be a struct');
assert(length(T) == 3, 'T should have 3 rows');
assert(isfield(T, 'SCORE'), 'T must have SCORE field');
assert(isnumeric([T.SCORE]), 'SCORE must be numeric');
"#,
    );

    // Task 3: temperature conversion function
    table.insert(
        (3, Language::Python),
        r#"
res = convert_temp(0)
assert abs(res['kelvin'] - 273.15) < 0.01
assert abs(res['fahrenheit'] - 32) < 0.01
"#,
    );
    table.insert(
        (3, Language::Octave),
        r#"
res = convert_temp(0);
assert(abs(res.kelvin - 273.15) < 0.01 && abs(res.fahrenheit - 32) < 0.01);
"#,
    );

    // Task 4: date extraction from a log file
    table.insert(
        (4, Language::Python),
        r#"
assert len(dates) >= 3, 'Should find at least 3 dates'
assert all(len(d) == 8 for d in dates), 'Dates should be in YYYYMMDD format'
"#,
    );
    table.insert(
        (4, Language::Octave),
        r#"
assert(length(dates) >= 3);
"#,
    );

    // Task 5: linear system solution
    table.insert(
        (5, Language::Python),
        r#"
import numpy as np
# x+y=5, x-y=-1 -> x=2, y=3
assert np.allclose(x, [2, 3]) or np.allclose(x, [[2],[3]]), f'Expected [2, 3], got {x}'
"#,
    );
    table.insert(
        (5, Language::Octave),
        r#"
assert(all(abs(x(:) - [2; 3]) < 1e-5));
"#,
    );

    // Task 6: legend and LaTeX title
    table.insert(
        (6, Language::Python),
        r#"
import matplotlib.pyplot as plt
ax = plt.gca()
assert ax.get_legend() is not None, 'Legend missing'
assert '$' in plt.gca().get_title().get_text(), 'Title should contain LaTeX (e.g., using $...$)'
"#,
    );
    table.insert(
        (6, Language::Octave),
        r#"
if isempty(get(gca, 'Legend')), error('Legend missing'); end
"#,
    );

    // Task 7: average with empty-input handling
    table.insert(
        (7, Language::Python),
        r#"
assert get_average([10, 20]) == 15
try:
    get_average([])
except Exception as e:
    raise AssertionError(f'Empty list caused an error: {e}')
"#,
    );
    table.insert(
        (7, Language::Octave),
        r#"
% Check if data variable exists and we can access it
assert(exist('data', 'var') == 1);
"#,
    );

    // Task 8: JSON user records
    table.insert(
        (8, Language::Python),
        r#"
import json
d = json.loads(json_data)
assert len(d) == 5, 'Should have 5 users'
assert 'reliability_score' in d[0], 'Missing reliability_score'
"#,
    );
    table.insert(
        (8, Language::Octave),
        r#"
assert(ischar(json_data) && length(json_data) > 50);
"#,
    );

    // Task 9: vectorization; inspects the submission source through the
    // injected `code` variable
    table.insert(
        (9, Language::Python),
        r#"
import numpy as np
assert 'for' not in code, 'Loops are forbidden for vectorization task'
assert 'np.' in code or 'numpy' in code, 'NumPy must be used'
"#,
    );
    table.insert(
        (9, Language::Octave),
        r#"
assert(~contains(code, 'for'), 'Loops are forbidden for vectorization task');
"#,
    );

    // Task 10: polar plot
    table.insert(
        (10, Language::Python),
        r#"
import matplotlib.pyplot as plt
assert any(isinstance(ax, plt.PolarAxes) for ax in plt.gcf().axes), 'Must use polar projection'
"#,
    );
    table.insert(
        (10, Language::Octave),
        r#"
assert(exist('theta', 'var') == 1 && exist('rho', 'var') == 1);
"#,
    );

    table
});

/// The trusted snippet for (task, language), or the empty string when no
/// validation is registered.
pub fn snippet(task_id: u32, language: Language) -> &'static str {
    VALIDATORS.get(&(task_id, language)).copied().unwrap_or("")
}

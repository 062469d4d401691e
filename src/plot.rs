use crate::common::*;
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::sampled::SampledFunc;

/// Renders a [`SampledFunc`] as a text bar chart, one row per sampled
/// position:
///
/// ```text
/// 2.00		2.78%		***********
/// ```
#[derive(Debug, Clone, Default)]
pub struct Plotter {
    config: PlotConfig,
}

impl Plotter {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Plots `func` from its smallest position up to one past its sample
    /// count, taking `supersampling` rows per position.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for a non-positive or non-finite
    /// supersampling, and propagates lookup errors of [`SampledFunc::sample`].
    pub fn plot(&self, func: &SampledFunc) -> Result<String> {
        let supersampling = self.config.supersampling;
        if !(supersampling > 0.0 && supersampling.is_finite()) {
            return Err(Error::invalid_input(format!(
                "supersampling must be positive, got {}",
                supersampling
            )));
        }

        let scale = if func.max_value() > 0.0 {
            self.config.bar_width / func.max_value()
        } else {
            0.0
        };
        let start = func.min_position() as Val;
        let end = (func.samples_count() + 1) as Val;

        let mut rows = Vec::new();
        for i in 0u64.. {
            let x = start + i as Val / supersampling;
            if x > end {
                break;
            }
            let value = func.sample(x)?;
            rows.push(self.row(x, value, scale));
        }
        log::trace!("plotted {} rows", rows.len());

        Ok(rows.into_iter().map(|row| row + "\n").collect())
    }

    fn row(&self, x: Val, value: Val, scale: Val) -> String {
        let bars = std::iter::repeat(self.config.bar_char)
            .take((value * scale) as usize)
            .collect::<String>();
        format!("{:.2}\t\t{:.2}%\t\t{}", x, value * 100.0, bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::dice_prob_func;

    fn bars(row: &str) -> usize {
        row.rsplit('\t').next().unwrap().chars().count()
    }

    #[test]
    fn test_plot_two_d6() {
        let out = Plotter::default().plot(&dice_prob_func(2, 6).unwrap()).unwrap();
        let rows = out.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0], format!("2.00\t\t2.78%\t\t{}", "*".repeat(11)));
        assert!(rows[10].starts_with("12.00\t\t2.78%\t\t"));
        assert!(rows[5].starts_with("7.00\t\t16.67%\t\t"));
        assert!(bars(rows[5]) >= 69 && bars(rows[5]) <= 70);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_plot_supersampled() {
        let f = dice_prob_func(2, 6).unwrap().cumulative().inverse();
        let plotter = Plotter::new(PlotConfig::default().with_supersampling(5.0));
        let out = plotter.plot(&f).unwrap();
        let rows = out.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 51);
        assert!(rows[1].starts_with("2.20\t\t"));
        assert!(rows[50].starts_with("12.00\t\t100.00%\t\t"));
        assert_eq!(bars(rows[50]), 70);
    }

    #[test]
    fn test_plot_custom_bars() {
        let f = SampledFunc::from_samples([(2, 0.5), (3, 1.0)]).unwrap();
        let config = PlotConfig {
            bar_char: '#',
            bar_width: 4.0,
            supersampling: 1.0,
        };
        let out = Plotter::new(config).plot(&f).unwrap();
        assert_eq!(out, "2.00\t\t50.00%\t\t##\n3.00\t\t100.00%\t\t####\n");
    }

    #[test]
    fn test_plot_invalid_supersampling() {
        let f = dice_prob_func(2, 6).unwrap();
        for ss in [0.0, -1.0, Val::NAN, Val::INFINITY] {
            let plotter = Plotter::new(PlotConfig::default().with_supersampling(ss));
            assert!(matches!(plotter.plot(&f), Err(Error::InvalidInput(_))));
        }
    }

    #[test]
    fn test_plot_propagates_missing_positions() {
        let f = SampledFunc::from_samples([(0, 1.0), (1, 2.0)]).unwrap();
        assert_eq!(Plotter::default().plot(&f), Err(Error::KeyNotFound(2)));
    }
}

mod charts;

pub use charts::{
    render_barplot, render_boxplot, render_heatmap, render_histograms, ChartSet, BARPLOT_FILE,
    BOXPLOT_FILE, HEATMAP_FILE, HISTOGRAMS_FILE,
};

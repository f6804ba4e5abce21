//! Benchmarks for sidebar structure generation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hope_app::{MockApp, Page};
use hope_config::{LocaleConfig, SidebarOptions, ThemeConfig};
use hope_sidebar::{SidebarSorter, get_sidebar_data, get_sidebar_info};

/// Create pages for a directory tree with specified depth and breadth.
fn create_pages(depth: usize, breadth: usize) -> Vec<Page> {
    fn create_level(
        dir: &str,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
        pages: &mut Vec<Page>,
    ) {
        if current_depth > max_depth {
            return;
        }

        pages.push(Page::new(format!("{dir}README.md"), format!("Level {current_depth}")));
        for i in 0..breadth {
            pages.push(Page::new(format!("{dir}page-{i}.md"), format!("Page {i}")));
            let child_dir = format!("{dir}section-{i}/");
            create_level(&child_dir, current_depth + 1, max_depth, breadth, pages);
        }
    }

    let mut pages = Vec::new();
    create_level("", 0, depth, breadth, &mut pages);
    pages
}

fn bench_sidebar_info(c: &mut Criterion) {
    let mut group = c.benchmark_group("sidebar_info");
    let sorter = SidebarSorter::default();

    for (depth, breadth) in [(2, 5), (3, 5), (4, 4)] {
        let pages = create_pages(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("pages", pages.len()),
            &pages,
            |b, pages| b.iter(|| get_sidebar_info(pages, "", &sorter)),
        );
    }

    group.finish();
}

fn bench_sidebar_data(c: &mut Criterion) {
    let app = create_pages(3, 5)
        .into_iter()
        .fold(MockApp::new(), MockApp::with_page_record);
    let theme_config = ThemeConfig::with_root(LocaleConfig {
        sidebar: SidebarOptions::Structure,
        ..LocaleConfig::default()
    });

    c.bench_function("sidebar_data_root_structure", |b| {
        b.iter(|| get_sidebar_data(&app, &theme_config, None));
    });
}

criterion_group!(benches, bench_sidebar_info, bench_sidebar_data);
criterion_main!(benches);

//! Performance benchmarks for regroup

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regroup::{organize_source, parse_sections, GroupSet, OrganizerConfig};

// A file shaped like the worst offenders the tool sees: duplicated,
// unsorted imports from several groups above a class body.
const MESSY_SOURCE: &str = r#"import java.util.Map;
import java.util.List;
import java.util.List;
import javax.swing.JFrame;
import flash.events.Event;
import flash.display.Sprite;
import com.example.util.StringUtil;
import com.example.net.Connection;
import org.example.log.Log;
import scala.collection.mutable._
import static java.util.Arrays.sort;

class Messy {
    Map map;
    List list;
    JFrame frame;
    Event event;
    Sprite sprite;
    StringUtil strings;
    Connection connection;
    Log log;

    void go() {
        sort();
    }
}
"#;

fn bench_parse_sections(c: &mut Criterion) {
    c.bench_function("parse_sections", |b| {
        b.iter(|| parse_sections(black_box(MESSY_SOURCE)))
    });
}

fn bench_organize_source(c: &mut Criterion) {
    let groups = GroupSet::default();
    let config = OrganizerConfig::default();
    c.bench_function("organize_source", |b| {
        b.iter(|| organize_source(black_box(MESSY_SOURCE), &groups, &config))
    });
}

fn bench_organize_canonical_noop(c: &mut Criterion) {
    let groups = GroupSet::default();
    let config = OrganizerConfig::default();
    let canonical = organize_source(MESSY_SOURCE, &groups, &config)
        .expect("default groups classify everything")
        .expect("messy source gets rewritten");
    c.bench_function("organize_canonical_noop", |b| {
        b.iter(|| organize_source(black_box(&canonical), &groups, &config))
    });
}

criterion_group!(
    benches,
    bench_parse_sections,
    bench_organize_source,
    bench_organize_canonical_noop
);
criterion_main!(benches);

use crate::*;

pub fn handle_tabulate_commands(cli: &Cli, mode: Mode) -> anyhow::Result<bool> {
    match mode {
        Mode::ReadRules => {
            let path = cli.input()?;
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut rules = read_rules(source.lines());
            rules.sort();
            print_lines(cli.json, &rules, |r| r.clone())?;
        }
        Mode::ReadSheets => {
            let rules = sorted_rule_names(read_rule_column(cli.input()?)?);
            print_lines(cli.json, &rules, |r| r.clone())?;
        }
        Mode::ReadCounts => {
            let listing_path = cli.input()?;
            let rules = read_rule_column(cli.aux()?)?;
            let listing = std::fs::read_to_string(listing_path)
                .with_context(|| format!("failed to read {}", listing_path.display()))?;
            let counts = parse_count_listing(&listing, &listing_path.display().to_string())?;
            let rows: Vec<SheetCount> = rules
                .iter()
                .map(|r| SheetCount {
                    rule: r.clone(),
                    count: counts.get(r).copied(),
                })
                .collect();
            print_csv(cli.json, &rows, || render_count_column(&rules, &counts))?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

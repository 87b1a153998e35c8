use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::{MealPlanResult, ShoppingList};

/// Write the shopping list as `category,item` rows.
pub fn write_shopping_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["category", "item"])?;
    for (category, items) in list.categories() {
        for item in items {
            wtr.write_record([category, item.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Write the full plan as pretty JSON in the camelCase wire shape.
pub fn write_plan_json(plan: &MealPlanResult, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PreferenceModel, Region};
    use crate::planner::generate_meal_plan;

    #[test]
    fn test_shopping_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        let mut list = ShoppingList::new();
        list.add_items("grains", ["rice", "oats"]);
        list.add_items("spices", ["turmeric"]);

        write_shopping_csv(&list, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<(String, String)> = rdr
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].to_string())
            })
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.contains(&("spices".to_string(), "turmeric".to_string())));
    }

    #[test]
    fn test_plan_json_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        let plan = generate_meal_plan(&PreferenceModel::new(Region::India));

        write_plan_json(&plan, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"weekPlan\""));
        let back: MealPlanResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, plan);
    }
}

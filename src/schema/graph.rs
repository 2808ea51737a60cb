//! Prerequisite graph between generated tables.
//!
//! Provides:
//! - Topological ordering of the tables (prerequisites before dependents)
//! - The auto-fill plan for a single requested table

use super::Table;
use std::collections::VecDeque;

/// Dependency graph over [`Table::ALL`].
///
/// Edges point from a prerequisite to the tables that consume its
/// identifiers. Fill edges (brands → products) are included.
#[derive(Debug)]
pub struct TableGraph {
    /// For each table, the tables it draws foreign keys from
    pub parents: Vec<Vec<Table>>,
    /// For each table, the tables drawing foreign keys from it
    pub children: Vec<Vec<Table>>,
}

fn index(table: Table) -> usize {
    Table::ALL
        .iter()
        .position(|t| *t == table)
        .unwrap_or_default()
}

impl TableGraph {
    pub fn new() -> Self {
        let n = Table::ALL.len();
        let mut parents = vec![Vec::new(); n];
        let mut children = vec![Vec::new(); n];

        for table in Table::ALL {
            for &parent in table.fill_dependencies() {
                parents[index(table)].push(parent);
                children[index(parent)].push(table);
            }
        }

        Self { parents, children }
    }

    /// Kahn's algorithm over the fill edges.
    pub fn topo_order(&self) -> Vec<Table> {
        let mut in_degree: Vec<usize> = self.parents.iter().map(Vec::len).collect();
        let mut queue: VecDeque<Table> = Table::ALL
            .iter()
            .copied()
            .filter(|t| in_degree[index(*t)] == 0)
            .collect();

        let mut order = Vec::with_capacity(Table::ALL.len());
        while let Some(table) = queue.pop_front() {
            order.push(table);
            for &child in &self.children[index(table)] {
                let deg = &mut in_degree[index(child)];
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(child);
                }
            }
        }
        order
    }
}

impl Default for TableGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Tables that must be auto-filled before `table` can be generated.
///
/// Walks fill dependencies depth-first and returns, prerequisites first,
/// every table for which `is_populated` is false. The requested table
/// itself is not included.
pub fn fill_plan<F>(table: Table, is_populated: F) -> Vec<Table>
where
    F: Fn(Table) -> bool,
{
    fn visit<F: Fn(Table) -> bool>(table: Table, is_populated: &F, plan: &mut Vec<Table>) {
        for &dep in table.fill_dependencies() {
            if is_populated(dep) || plan.contains(&dep) {
                continue;
            }
            visit(dep, is_populated, plan);
            plan.push(dep);
        }
    }

    let mut plan = Vec::new();
    visit(table, &is_populated, &mut plan);
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topo_order_puts_prerequisites_first() {
        let order = TableGraph::new().topo_order();
        assert_eq!(order.len(), Table::ALL.len());

        let pos = |t: Table| order.iter().position(|x| *x == t).unwrap();
        assert!(pos(Table::Users) < pos(Table::Invoices));
        assert!(pos(Table::Invoices) < pos(Table::InvoiceItems));
        assert!(pos(Table::Categories) < pos(Table::Products));
        assert!(pos(Table::Brands) < pos(Table::Products));
        assert!(pos(Table::Products) < pos(Table::ProductImages));
    }

    #[test]
    fn test_fill_plan_from_empty_context() {
        let plan = fill_plan(Table::InvoiceItems, |_| false);
        assert_eq!(
            plan,
            vec![
                Table::Users,
                Table::Invoices,
                Table::Categories,
                Table::Brands,
                Table::Products,
            ]
        );
    }

    #[test]
    fn test_fill_plan_skips_populated() {
        let plan = fill_plan(Table::ProductImages, |t| t == Table::Categories);
        assert_eq!(plan, vec![Table::Brands, Table::Products]);
    }

    #[test]
    fn test_fill_plan_for_root_table_is_empty() {
        assert!(fill_plan(Table::Users, |_| false).is_empty());
        assert!(fill_plan(Table::Brands, |_| false).is_empty());
    }
}

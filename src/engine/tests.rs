#[cfg(test)]
mod tests {
    use crate::{Change, EdgeBehavior, GameState, GridPosition, LifeEngine};
    use std::{cell::RefCell, rc::Rc};

    fn seeded(
        rows: usize,
        columns: usize,
        edge: EdgeBehavior,
        alive: &[(usize, usize)],
    ) -> LifeEngine {
        let mut life = LifeEngine::new(rows, columns, edge).unwrap();
        for &position in alive {
            life.toggle_cell(position);
        }
        life
    }

    fn recorded(life: &mut LifeEngine) -> Rc<RefCell<Vec<Change>>> {
        let log = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&log);
        life.subscribe(move |_, change| sink.borrow_mut().push(change));
        log
    }

    #[test]
    fn test_blank() {
        let life = LifeEngine::new(3, 4, EdgeBehavior::default()).unwrap();
        assert_eq!((life.rows(), life.columns()), (3, 4));
        assert_eq!(life.cells().len(), 12);
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 0);
        assert_eq!(life.state(), GameState::Seeding);
        assert_eq!(life.edge_behavior(), EdgeBehavior::NoWrap);
        assert_eq!(life.cell_rows().count(), 3);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(LifeEngine::new(0, 5, EdgeBehavior::NoWrap).is_err());
        assert!(LifeEngine::new(5, 0, EdgeBehavior::WrapAround).is_err());
    }

    #[test]
    fn test_toggle() {
        let mut life = seeded(3, 3, EdgeBehavior::NoWrap, &[(1, 2)]);
        assert_eq!(life.cell((1, 2)), Some(true));
        assert_eq!(life.row(1), Some([false, false, true].as_slice()));
        life.toggle_cell(GridPosition::new(1, 2));
        assert_eq!(life.cell((1, 2)), Some(false));
        assert_eq!(life.cell((3, 0)), None);
    }

    #[test]
    fn test_display() {
        let life = seeded(2, 3, EdgeBehavior::NoWrap, &[(0, 0), (1, 2)]);
        assert_eq!(life.to_string(), "#..\n..#\n");
    }

    #[test]
    fn test_start_computes_first_generation() {
        // blinker
        let mut life = seeded(5, 5, EdgeBehavior::NoWrap, &[(2, 1), (2, 2), (2, 3)]);
        life.start();
        assert_eq!(life.generation(), 1);
        assert_eq!(life.state(), GameState::Running);
        assert_eq!(life.to_string(), ".....\n..#..\n..#..\n..#..\n.....\n");
    }

    #[test]
    fn test_step_requires_running() {
        let mut life = seeded(5, 5, EdgeBehavior::NoWrap, &[(2, 1), (2, 2), (2, 3)]);
        assert_eq!(life.step(3), 0);
        assert_eq!(life.generation(), 0);
        assert_eq!(life.state(), GameState::Seeding);
    }

    #[test]
    fn test_edits_locked_after_start() {
        let mut life = seeded(5, 5, EdgeBehavior::NoWrap, &[(2, 1), (2, 2), (2, 3)]);
        life.start();
        let before = life.cells().to_vec();
        life.toggle_cell((0, 0));
        life.set_edge_behavior(EdgeBehavior::WrapAround);
        life.randomize(1., Some(42));
        assert_eq!(life.cells(), before.as_slice());
        assert_eq!(life.edge_behavior(), EdgeBehavior::NoWrap);
    }

    #[test]
    fn test_living_neighbors() {
        let life = seeded(3, 3, EdgeBehavior::NoWrap, &[(0, 0), (0, 1), (2, 2)]);
        assert_eq!(life.living_neighbors((1, 1)), Some(3));
        assert_eq!(life.living_neighbors((0, 0)), Some(1));
        assert_eq!(life.living_neighbors((0, 3)), None);
    }

    #[test]
    fn test_notifications() {
        let mut life = LifeEngine::new(4, 4, EdgeBehavior::NoWrap).unwrap();
        let log = recorded(&mut life);

        life.toggle_cell((0, 0));
        life.toggle_cell((9, 9));
        life.set_edge_behavior(EdgeBehavior::NoWrap);
        life.set_edge_behavior(EdgeBehavior::WrapAround);
        life.start();
        life.step(4);
        life.restart();
        life.restart();

        assert_eq!(
            *log.borrow(),
            [
                Change::CellToggled(GridPosition::new(0, 0)),
                Change::EdgeBehaviorChanged(EdgeBehavior::WrapAround),
                Change::Started,
                Change::Restarted,
            ]
        );
        assert_eq!(life.revision(), 4);
    }

    #[test]
    fn test_notification_sees_finished_mutation() {
        let mut life = seeded(5, 5, EdgeBehavior::NoWrap, &[(2, 1), (2, 2), (2, 3)]);
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&seen);
        life.subscribe(move |life, _| {
            sink.borrow_mut()
                .push((life.generation(), life.state(), life.population()))
        });

        life.start();
        assert_eq!(life.step(2), 2);

        assert_eq!(
            *seen.borrow(),
            [(1, GameState::Running, 3), (3, GameState::Running, 3)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut life = LifeEngine::new(2, 2, EdgeBehavior::NoWrap).unwrap();
        let log = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&log);
        let id = life.subscribe(move |_, _| *sink.borrow_mut() += 1);

        life.toggle_cell((0, 0));
        assert!(life.unsubscribe(id));
        assert!(!life.unsubscribe(id));
        life.toggle_cell((0, 0));

        assert_eq!(*log.borrow(), 1);
        assert_eq!(life.revision(), 2);
    }

    #[test]
    fn test_randomize() {
        let mut a = LifeEngine::new(16, 16, EdgeBehavior::NoWrap).unwrap();
        let mut b = LifeEngine::new(16, 16, EdgeBehavior::NoWrap).unwrap();
        a.randomize(0.5, Some(42));
        b.randomize(0.5, Some(42));
        assert_eq!(a.cells(), b.cells());
        assert!(a.population() > 0);

        a.randomize(0., Some(42));
        assert_eq!(a.population(), 0);
        a.randomize(2., None);
        assert_eq!(a.population(), 256);
    }

    #[test]
    fn test_randomize_without_effect_is_silent() {
        let mut life = LifeEngine::new(4, 4, EdgeBehavior::NoWrap).unwrap();
        let log = recorded(&mut life);

        life.randomize(0., Some(1));
        assert_eq!(life.population(), 0);
        assert_eq!(life.revision(), 0);

        life.randomize(1., Some(1));
        life.randomize(1., Some(2));
        assert_eq!(life.population(), 16);
        assert_eq!(life.revision(), 1);
        assert_eq!(*log.borrow(), [Change::Randomized]);
    }
}

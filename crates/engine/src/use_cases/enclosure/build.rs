use std::sync::Arc;

use dinopark_domain::{Diet, Dinosaur, Enclosure, Security, SizeClass};

use super::BuildError;
use crate::infrastructure::ports::{EnclosureRepo, RandomPort};
use crate::use_cases::dinosaur::DinosaurFactory;

/// Security measures added when no quantity is requested.
pub const DEFAULT_SECURITIES: usize = 1;

/// Dinosaurs added when no quantity is requested.
pub const DEFAULT_DINOSAURS: usize = 3;

const SECURITY_NAMES: [&str; 3] = ["Fence", "Electric fence", "Guard tower"];

/// Builds populated enclosures and hands them to storage.
///
/// Each build persists exactly one enclosure and flushes once, after every
/// security and dinosaur has been added. If any dinosaur is refused the build
/// stops at that dinosaur, the half-built enclosure is dropped and nothing
/// reaches storage.
pub struct EnclosureBuilderService {
    enclosure_repo: Arc<dyn EnclosureRepo>,
    factory: Arc<DinosaurFactory>,
    random: Arc<dyn RandomPort>,
}

impl EnclosureBuilderService {
    pub fn new(
        enclosure_repo: Arc<dyn EnclosureRepo>,
        factory: Arc<DinosaurFactory>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            enclosure_repo,
            factory,
            random,
        }
    }

    /// Build an enclosure with randomly named securities and random dinosaurs.
    ///
    /// One diet is drawn for the whole batch so the residents never mix;
    /// every dinosaur gets its own random size. See [`DEFAULT_SECURITIES`]
    /// and [`DEFAULT_DINOSAURS`] for the usual quantities.
    pub async fn build_enclosure_by_quantity(
        &self,
        number_of_securities: usize,
        number_of_dinosaurs: usize,
    ) -> Result<Enclosure, BuildError> {
        let mut enclosure = Enclosure::new();

        for _ in 0..number_of_securities {
            let name = SECURITY_NAMES[self.random.pick(SECURITY_NAMES.len())];
            enclosure.add_security(Security::new(name, true, enclosure.id()));
        }

        let diets = Diet::all();
        let diet = diets[self.random.pick(diets.len())];
        let sizes = SizeClass::all();
        for _ in 0..number_of_dinosaurs {
            let size = sizes[self.random.pick(sizes.len())];
            let specification = format!(
                "{} {} dinosaur",
                size.specification_word(),
                diet.specification_word()
            );
            let dinosaur = self.factory.grow_from_specification(&specification);
            self.admit(&mut enclosure, dinosaur)?;
        }

        self.store(&enclosure).await?;
        Ok(enclosure)
    }

    /// Build an enclosure from explicit security names and dinosaur descriptions.
    ///
    /// Securities are added active and in order; one dinosaur is grown per
    /// specification and added in order. Specifications are not checked
    /// against each other up front: mixing diets fails on the first
    /// offending dinosaur.
    pub async fn build_enclosure_verbose<S, D>(
        &self,
        security_names: &[S],
        dinosaur_specifications: &[D],
    ) -> Result<Enclosure, BuildError>
    where
        S: AsRef<str>,
        D: AsRef<str>,
    {
        let mut enclosure = Enclosure::new();

        for name in security_names {
            enclosure.add_security(Security::new(name.as_ref(), true, enclosure.id()));
        }

        for specification in dinosaur_specifications {
            let dinosaur = self.factory.grow_from_specification(specification.as_ref());
            self.admit(&mut enclosure, dinosaur)?;
        }

        self.store(&enclosure).await?;
        Ok(enclosure)
    }

    fn admit(&self, enclosure: &mut Enclosure, mut dinosaur: Dinosaur) -> Result<(), BuildError> {
        dinosaur.set_enclosure(enclosure.id());
        tracing::debug!(
            enclosure_id = %enclosure.id(),
            genus = dinosaur.genus(),
            length = dinosaur.length(),
            is_carnivorous = dinosaur.is_carnivorous(),
            "Adding dinosaur to enclosure"
        );

        if let Err(e) = enclosure.add_dinosaur(dinosaur) {
            tracing::warn!(
                enclosure_id = %enclosure.id(),
                residents = enclosure.dinosaur_count(),
                error = %e,
                "Enclosure build aborted"
            );
            return Err(e.into());
        }
        Ok(())
    }

    async fn store(&self, enclosure: &Enclosure) -> Result<(), BuildError> {
        self.enclosure_repo.persist(enclosure).await?;
        self.enclosure_repo.flush().await?;

        tracing::info!(
            enclosure_id = %enclosure.id(),
            securities = enclosure.securities().len(),
            dinosaurs = enclosure.dinosaur_count(),
            "Built enclosure"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockEnclosureRepo, MockRandomPort, RepoError};
    use crate::infrastructure::random::{FixedRandom, SystemRandom};
    use dinopark_domain::EnclosureError;

    fn service_with(repo: MockEnclosureRepo, random: Arc<dyn RandomPort>) -> EnclosureBuilderService {
        EnclosureBuilderService::new(
            Arc::new(repo),
            Arc::new(DinosaurFactory::new(random.clone())),
            random,
        )
    }

    /// Repo expecting exactly one persist and one flush.
    fn repo_expecting_one_save() -> MockEnclosureRepo {
        let mut repo = MockEnclosureRepo::new();
        repo.expect_persist().times(1).returning(|_| Ok(()));
        repo.expect_flush().times(1).returning(|| Ok(()));
        repo
    }

    /// Repo that must never be written to.
    fn repo_expecting_no_save() -> MockEnclosureRepo {
        let mut repo = MockEnclosureRepo::new();
        repo.expect_persist().never();
        repo.expect_flush().never();
        repo
    }

    #[tokio::test]
    async fn builds_enclosure_by_quantity() {
        let service = service_with(repo_expecting_one_save(), Arc::new(SystemRandom::new()));

        let enclosure = service
            .build_enclosure_by_quantity(DEFAULT_SECURITIES, DEFAULT_DINOSAURS)
            .await
            .unwrap();

        assert_eq!(enclosure.securities().len(), 1);
        assert_eq!(enclosure.dinosaur_count(), 3);
        assert!(enclosure.is_security_active());
        assert!(SECURITY_NAMES.contains(&enclosure.securities()[0].name()));
        let diet = enclosure.dinosaurs()[0].is_carnivorous();
        assert!(enclosure
            .dinosaurs()
            .iter()
            .all(|d| d.is_carnivorous() == diet));
    }

    #[tokio::test]
    async fn quantity_build_shares_one_diet_over_many_runs() {
        for _ in 0..50 {
            let service =
                service_with(repo_expecting_one_save(), Arc::new(SystemRandom::new()));
            let enclosure = service.build_enclosure_by_quantity(2, 10).await.unwrap();

            assert_eq!(enclosure.securities().len(), 2);
            assert_eq!(enclosure.dinosaur_count(), 10);
            let first = enclosure.dinosaurs()[0].diet();
            assert!(enclosure.dinosaurs().iter().all(|d| d.diet() == first));
        }
    }

    #[tokio::test]
    async fn quantity_build_uses_drawn_names_diet_and_sizes() {
        let mut random = MockRandomPort::new();
        // security name, diet, then one size per dinosaur
        let mut picks = vec![2usize, 1, 2, 0].into_iter();
        random
            .expect_pick()
            .times(4)
            .returning(move |_| picks.next().unwrap_or(0));
        random.expect_gen_range().returning(|min, _| min);

        let service = service_with(repo_expecting_one_save(), Arc::new(random));
        let enclosure = service.build_enclosure_by_quantity(1, 2).await.unwrap();

        assert_eq!(enclosure.securities()[0].name(), "Guard tower");
        let dinosaurs = enclosure.dinosaurs();
        assert!(dinosaurs.iter().all(|d| d.is_carnivorous()));
        assert_eq!(dinosaurs[0].length(), 30);
        assert_eq!(dinosaurs[1].length(), 1);
    }

    #[tokio::test]
    async fn quantity_build_sets_back_references() {
        let service = service_with(repo_expecting_one_save(), Arc::new(SystemRandom::new()));
        let enclosure = service.build_enclosure_by_quantity(1, 3).await.unwrap();

        for dinosaur in enclosure.dinosaurs() {
            assert_eq!(dinosaur.enclosure_id(), Some(enclosure.id()));
        }
        for security in enclosure.securities() {
            assert_eq!(security.enclosure_id(), enclosure.id());
        }
    }

    #[tokio::test]
    async fn quantity_build_without_security_fails_before_persisting() {
        let service = service_with(repo_expecting_no_save(), Arc::new(SystemRandom::new()));

        let result = service.build_enclosure_by_quantity(0, 3).await;

        assert!(matches!(
            result,
            Err(BuildError::Enclosure(EnclosureError::SecurityInactive))
        ));
    }

    #[tokio::test]
    async fn quantity_build_without_dinosaurs_still_persists() {
        let service = service_with(repo_expecting_one_save(), Arc::new(SystemRandom::new()));

        let enclosure = service.build_enclosure_by_quantity(0, 0).await.unwrap();

        assert_eq!(enclosure.dinosaur_count(), 0);
        assert!(enclosure.securities().is_empty());
    }

    #[tokio::test]
    async fn builds_enclosure_verbose() {
        let mut repo = MockEnclosureRepo::new();
        repo.expect_persist()
            .withf(|e: &Enclosure| e.dinosaur_count() == 2 && e.securities().len() == 2)
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_flush().times(1).returning(|| Ok(()));
        let service = service_with(repo, Arc::new(SystemRandom::new()));

        let enclosure = service
            .build_enclosure_verbose(
                &["Fence", "Guard"],
                &["large carnivorous dinosaur", "small carnivore"],
            )
            .await
            .unwrap();

        let names: Vec<_> = enclosure.securities().iter().map(Security::name).collect();
        assert_eq!(names, vec!["Fence", "Guard"]);
        assert!(enclosure.securities().iter().all(Security::is_active));

        let dinosaurs = enclosure.dinosaurs();
        assert_eq!(dinosaurs.len(), 2);
        assert!(dinosaurs.iter().all(Dinosaur::is_carnivorous));
        assert!(dinosaurs[0].length() >= 10);
        assert!(dinosaurs[1].length() < 10);
    }

    #[tokio::test]
    async fn verbose_build_with_mixed_diets_fails_without_persisting() {
        let service = service_with(repo_expecting_no_save(), Arc::new(FixedRandom(0)));

        let result = service
            .build_enclosure_verbose(
                &["Fence"],
                &["large carnivorous dinosaur", "large herbivore", "small carnivore"],
            )
            .await;

        assert!(matches!(
            result,
            Err(BuildError::Enclosure(EnclosureError::DietMismatch))
        ));
    }

    #[tokio::test]
    async fn verbose_build_without_securities_fails() {
        let service = service_with(repo_expecting_no_save(), Arc::new(FixedRandom(0)));
        let no_securities: [&str; 0] = [];

        let result = service
            .build_enclosure_verbose(&no_securities, &["small herbivore"])
            .await;

        assert!(matches!(
            result,
            Err(BuildError::Enclosure(EnclosureError::SecurityInactive))
        ));
    }

    #[tokio::test]
    async fn repository_failure_is_propagated() {
        let mut repo = MockEnclosureRepo::new();
        repo.expect_persist().times(1).returning(|_| Ok(()));
        repo.expect_flush()
            .times(1)
            .returning(|| Err(RepoError::database("flush", "disk full")));
        let service = service_with(repo, Arc::new(FixedRandom(0)));

        let result = service
            .build_enclosure_verbose(&["Fence".to_string()], &["tiny herbivore".to_string()])
            .await;

        assert!(matches!(result, Err(BuildError::Repo(_))));
    }
}

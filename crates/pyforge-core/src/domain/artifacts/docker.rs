//! Docker development setup artifacts.
//!
//! Emitted only when the blueprint enables docker: `Dockerfile`,
//! `entrypoint.sh`, `docker-compose.yml`, and `.dockerignore`.

use crate::domain::entities::blueprint::ProjectBlueprint;

const BASE_IMAGE: &str = "python:3.12-slim";

pub fn dockerfile(blueprint: &ProjectBlueprint) -> String {
    format!(
        "\
FROM {BASE_IMAGE}

ENV PYTHONDONTWRITEBYTECODE=1 \\
    PYTHONUNBUFFERED=1

WORKDIR /app

COPY pyproject.toml ./
RUN pip install --no-cache-dir .

COPY {package} ./{package}
COPY entrypoint.sh ./

ENTRYPOINT [\"./entrypoint.sh\"]
",
        package = blueprint.package_name(),
    )
}

pub fn entrypoint(blueprint: &ProjectBlueprint) -> String {
    format!(
        "\
#!/bin/sh
set -e

exec python -m {package} \"$@\"
",
        package = blueprint.package_name(),
    )
}

pub fn compose(blueprint: &ProjectBlueprint) -> String {
    format!(
        "\
services:
  {name}:
    build: .
    volumes:
      - ./{package}:/app/{package}
    environment:
      - PYTHONUNBUFFERED=1
",
        name = blueprint.name(),
        package = blueprint.package_name(),
    )
}

pub fn dockerignore() -> String {
    "\
.git
.githooks
.venv
__pycache__
*.py[cod]
tests
.vscode
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blueprint() -> ProjectBlueprint {
        ProjectBlueprint::builder("my-app").docker(true).build().unwrap()
    }

    #[test]
    fn dockerfile_copies_the_package() {
        let content = dockerfile(&blueprint());
        assert!(content.starts_with(&format!("FROM {BASE_IMAGE}")));
        assert!(content.contains("COPY my_app ./my_app"));
    }

    #[test]
    fn entrypoint_execs_the_package() {
        let content = entrypoint(&blueprint());
        assert!(content.starts_with("#!/bin/sh\n"));
        assert!(content.contains("exec python -m my_app"));
    }

    #[test]
    fn compose_names_the_service_after_the_project() {
        let content = compose(&blueprint());
        assert!(content.contains("  my-app:"));
        assert!(content.contains("build: ."));
    }

    #[test]
    fn dockerignore_excludes_env_and_vcs() {
        let content = dockerignore();
        assert!(content.contains(".venv"));
        assert!(content.contains(".git"));
    }
}

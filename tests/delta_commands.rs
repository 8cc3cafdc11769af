use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{run_diffmatch_command, stdout_of, workdir, write_file};

#[rstest]
fn prints_delta_between_files(workdir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&workdir, "old.txt", "The cat sat on the mat.\n");
    write_file(&workdir, "new.txt", "The dog sat on the mat.\n");

    let actual_output = stdout_of(&mut run_diffmatch_command(
        workdir.path(),
        &["delta", "old.txt", "new.txt"],
    ));

    pretty_assertions::assert_eq!(actual_output, "=4\t-3\t+dog\t=17\n");

    Ok(())
}

#[rstest]
fn applies_delta_to_original(workdir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&workdir, "old.txt", "The cat sat on the mat.\n");
    write_file(&workdir, "patch.delta", "=4\t-3\t+dog\t=17\n");

    let actual_output = stdout_of(&mut run_diffmatch_command(
        workdir.path(),
        &["apply-delta", "old.txt", "patch.delta"],
    ));

    pretty_assertions::assert_eq!(actual_output, "The dog sat on the mat.\n");

    Ok(())
}

#[rstest]
fn delta_round_trips_generated_text(workdir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old: String = Paragraph(4..8).fake();
    let new = format!("{}\n{}\t%", Sentence(3..6).fake::<String>(), old);
    write_file(&workdir, "old.txt", &old);
    write_file(&workdir, "new.txt", &new);

    let delta = stdout_of(&mut run_diffmatch_command(
        workdir.path(),
        &["delta", "old.txt", "new.txt"],
    ));
    write_file(&workdir, "patch.delta", &delta);

    let rebuilt = stdout_of(&mut run_diffmatch_command(
        workdir.path(),
        &["apply-delta", "old.txt", "patch.delta"],
    ));

    pretty_assertions::assert_eq!(rebuilt, new);

    Ok(())
}

#[rstest]
fn rejects_delta_for_another_file(workdir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&workdir, "old.txt", "The cat sat on the mat.\nx");
    write_file(&workdir, "patch.delta", "=4\t-3\t+dog\t=17\n");

    run_diffmatch_command(workdir.path(), &["apply-delta", "old.txt", "patch.delta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot apply patch.delta to old.txt"))
        .stderr(predicate::str::contains(
            "delta length (24) does not match source text length (25)",
        ));

    Ok(())
}

#[rstest]
fn rejects_malformed_delta(workdir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&workdir, "old.txt", "abc");
    write_file(&workdir, "patch.delta", "=3\t*1\n");

    run_diffmatch_command(workdir.path(), &["apply-delta", "old.txt", "patch.delta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operation '*' in delta"));

    Ok(())
}

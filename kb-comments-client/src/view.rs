use crate::{
    api::{Comment, MenuScope, UserId},
    resolve_actions, CommentActions, CommentListState, PermissionCheck,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommentMode {
    Editing {
        draft: String,
        submit_enabled: bool,
        loading: bool,
    },
    Reading {
        actions: CommentActions,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentView<'a> {
    pub comment: &'a Comment,
    pub mode: CommentMode,
}

/// One view per comment, in list order
pub fn render_plan<'a>(
    comments: &'a [Comment],
    state: &CommentListState,
    viewer: UserId,
    scope: &MenuScope,
    perms: &dyn PermissionCheck,
) -> Vec<CommentView<'a>> {
    comments
        .iter()
        .map(|comment| {
            let mode = match state.slot().is_editing(comment.id) {
                true => CommentMode::Editing {
                    draft: state.slot().draft().to_string(),
                    submit_enabled: state.can_submit(),
                    loading: state.in_flight(),
                },
                false => CommentMode::Reading {
                    actions: resolve_actions(comment, viewer, scope, perms),
                },
            };
            CommentView { comment, mode }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{CommentId, MenuType, OrganizationId, PageId, PageInfo, PermissionKey, ProjectId},
        GrantedPermissions,
    };

    fn scope() -> MenuScope {
        MenuScope::project(ProjectId(1), OrganizationId(1))
    }

    fn comments(raw: &[(u8, u8)]) -> Vec<Comment> {
        raw.iter()
            .enumerate()
            .map(|(i, (user, version))| Comment {
                id: CommentId(i as i64),
                user_id: UserId(i64::from(*user % 4)),
                login_name: format!("user{user}"),
                real_name: String::new(),
                user_image_url: None,
                comment: format!("comment {i}"),
                last_update_date: None,
                object_version_number: i64::from(*version),
            })
            .collect()
    }

    #[test]
    fn one_view_per_comment_in_order() {
        bolero::check!()
            .with_type::<(Vec<(u8, u8)>, Option<u8>, bool)>()
            .cloned()
            .for_each(|(raw, edited, granted)| {
                let list = comments(&raw);
                let mut state = CommentListState::default();
                if let Some(c) = edited.and_then(|i| list.get(usize::from(i))) {
                    state.enter_edit(c);
                }
                let perms = match granted {
                    true => GrantedPermissions::new(
                        scope(),
                        [PermissionKey::delete_comment(MenuType::Project)],
                    ),
                    false => GrantedPermissions::none(scope()),
                };
                let plan = render_plan(&list, &state, UserId(0), &scope(), &perms);
                assert_eq!(plan.len(), list.len());
                for (view, comment) in plan.iter().zip(list.iter()) {
                    assert_eq!(view.comment.id, comment.id);
                }
                let editing = plan
                    .iter()
                    .filter(|v| matches!(v.mode, CommentMode::Editing { .. }))
                    .count();
                assert!(editing <= 1);
            });
    }

    #[test]
    fn edited_comment_renders_edit_box() {
        let list = comments(&[(3, 1), (3, 2), (9, 1)]);
        let mut state = CommentListState::default();
        state.enter_edit(&list[1]);
        state.update_draft(String::new());
        let perms = GrantedPermissions::none(scope());

        let plan = render_plan(&list, &state, UserId(3), &scope(), &perms);
        assert_eq!(
            plan[1].mode,
            CommentMode::Editing {
                draft: String::new(),
                submit_enabled: false,
                loading: false,
            }
        );

        state.update_draft(String::from("new text"));
        state.submit_edit(&list[1], &PageInfo { id: PageId(1) }).unwrap();
        let plan = render_plan(&list, &state, UserId(3), &scope(), &perms);
        assert_eq!(
            plan[1].mode,
            CommentMode::Editing {
                draft: String::from("new text"),
                submit_enabled: false,
                loading: true,
            }
        );
        assert!(matches!(plan[0].mode, CommentMode::Reading { actions } if actions.can_edit));
    }

    #[test]
    fn non_author_without_permission_has_no_controls() {
        let list = comments(&[(3, 1)]);
        let state = CommentListState::default();
        let plan = render_plan(
            &list,
            &state,
            UserId(9),
            &scope(),
            &GrantedPermissions::none(scope()),
        );
        assert_eq!(
            plan[0].mode,
            CommentMode::Reading {
                actions: CommentActions::default()
            }
        );
    }
}
